pub mod error;
pub mod filter;
pub mod memory;
pub mod persistence_adapter;
pub mod repositories;
pub mod storage_adapter;
pub mod tables;

pub use error::{DbError, Result};
pub use filter::{Filter, Order};
pub use memory::memory_storage::MemoryStorage;
pub use memory::memory_store::MemoryStore;
pub use persistence_adapter::{PersistenceAdapter, Record, from_record, to_record};
pub use repositories::collection_repository::CollectionRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::project_repository::ProjectRepository;
pub use storage_adapter::StorageAdapter;
