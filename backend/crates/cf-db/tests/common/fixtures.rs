use cf_core::{CollectionDraft, Project, ProjectDraft};
use cf_db::{MemoryStore, PersistenceAdapter};

use std::sync::Arc;

use uuid::Uuid;

/// Fresh, empty in-memory table service
pub fn create_test_adapter() -> Arc<dyn PersistenceAdapter> {
    Arc::new(MemoryStore::new())
}

pub fn create_test_project(owner_id: Uuid) -> Project {
    Project::new(
        ProjectDraft {
            title: format!("Project {}", &owner_id.to_string()[..8]),
            description: "Test project".to_string(),
            location: "Paris, France".to_string(),
            target_amount: 100_000.0,
            min_investment: 1_000.0,
            apy: 10.0,
            duration: 24,
            sections: vec![],
        },
        owner_id,
    )
}

pub fn create_test_collection_draft() -> CollectionDraft {
    CollectionDraft {
        name: "Seed round".to_string(),
        description: "Early backers".to_string(),
        price: 100.0,
        supply: 500,
        apy: 8.0,
        ..Default::default()
    }
}
