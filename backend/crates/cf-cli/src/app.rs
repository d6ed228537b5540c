//! Adapter wiring for offline and online runs.

use crate::CliResult;

use cf_auth::{
    IdentityAdapter, MemoryIdentityProvider, OwnerWorkspace, SessionStore, TestProjectSeeder,
};
use cf_client::{BaasClient, RestIdentityAdapter, RestPersistenceAdapter, RestStorageAdapter};
use cf_config::{Config, ConfigError};
use cf_db::{MemoryStorage, MemoryStore, PersistenceAdapter, StorageAdapter};

use std::sync::Arc;

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Everything held in process memory, gone on exit
    Offline,
    Online,
}

pub struct App {
    pub store: SessionStore,
    pub workspace: OwnerWorkspace,
    mode: Mode,
}

impl App {
    pub fn build(config: &Config, offline: bool) -> CliResult<Self> {
        if offline {
            Ok(Self::offline(config))
        } else {
            Self::online(config)
        }
    }

    pub fn offline(config: &Config) -> Self {
        info!("Running offline with in-memory adapters");
        Self::assemble(
            config,
            Mode::Offline,
            Arc::new(MemoryIdentityProvider::new()),
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStorage::new()),
        )
    }

    pub fn online(config: &Config) -> CliResult<Self> {
        if !config.backend.has_anon_key() {
            return Err(ConfigError::backend(
                "backend.anon_key is not set (config.toml or CF_BACKEND_ANON_KEY); use --offline to run without a backend",
            )
            .into());
        }

        info!("Connecting to {}", config.backend.url);
        let client = Arc::new(BaasClient::new(
            &config.backend.url,
            &config.backend.anon_key,
            config.backend.request_timeout(),
        )?);

        Ok(Self::assemble(
            config,
            Mode::Online,
            Arc::new(RestIdentityAdapter::new(Arc::clone(&client))),
            Arc::new(RestPersistenceAdapter::new(Arc::clone(&client))),
            Arc::new(RestStorageAdapter::new(client)),
        ))
    }

    fn assemble(
        config: &Config,
        mode: Mode,
        identity: Arc<dyn IdentityAdapter>,
        persistence: Arc<dyn PersistenceAdapter>,
        storage: Arc<dyn StorageAdapter>,
    ) -> Self {
        let mut store = SessionStore::new(identity, Arc::clone(&persistence));
        if config.backfill.enabled {
            store = store.with_seeder(Arc::new(TestProjectSeeder::new(Arc::clone(&persistence))));
        }

        let workspace = OwnerWorkspace::new(persistence, storage)
            .with_bucket(config.backend.storage_bucket.clone());

        Self {
            store,
            workspace,
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
