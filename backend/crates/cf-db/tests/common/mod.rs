#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{create_test_adapter, create_test_collection_draft, create_test_project};
