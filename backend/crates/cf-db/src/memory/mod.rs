//! In-process adapters for offline mode and tests.

pub mod memory_storage;
pub mod memory_store;
