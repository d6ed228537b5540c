mod collection;
mod project;
mod project_status;
mod role;
