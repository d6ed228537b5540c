pub mod collection_repository;
pub mod profile_repository;
pub mod project_repository;
