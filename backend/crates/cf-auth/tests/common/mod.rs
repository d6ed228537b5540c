#![allow(dead_code)]

pub mod adapters;
pub mod fixtures;

pub use adapters::{FlakyPersistence, ScriptedIdentity};
pub use fixtures::{TestHarness, create_harness, project_session};
