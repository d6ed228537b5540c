pub mod collection;
pub mod identity;
pub mod profile;
pub mod project;
pub mod project_status;
pub mod role;
