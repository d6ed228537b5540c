use crate::common::{FlakyPersistence, ScriptedIdentity};

use cf_auth::{Session, SessionState, SessionStore, TestProjectSeeder};
use cf_core::{Identity, Role};
use cf_db::{MemoryStore, PersistenceAdapter};

use std::sync::Arc;

use uuid::Uuid;

pub struct TestHarness {
    pub store: SessionStore,
    pub identity: Arc<ScriptedIdentity>,
    pub persistence: Arc<FlakyPersistence>,
    pub tables: Arc<MemoryStore>,
}

/// Session store over fresh memory adapters, with the default seeder attached.
pub fn create_harness() -> TestHarness {
    let tables = Arc::new(MemoryStore::new());
    let persistence = Arc::new(FlakyPersistence::new(Arc::clone(&tables)));
    let identity = Arc::new(ScriptedIdentity::default());

    let adapter: Arc<dyn PersistenceAdapter> = persistence.clone();
    let store = SessionStore::new(identity.clone(), Arc::clone(&adapter))
        .with_seeder(Arc::new(TestProjectSeeder::new(adapter)));

    TestHarness {
        store,
        identity,
        persistence,
        tables,
    }
}

pub fn project_session(email: &str) -> SessionState {
    SessionState::Authenticated(Session::new(
        Identity::new(Uuid::new_v4(), email),
        Role::Project,
    ))
}
