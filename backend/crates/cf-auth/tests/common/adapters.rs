//! Adapter wrappers whose failures can be switched on per test.

use cf_auth::{IdentityAdapter, IdentityError, IdentityResult, MemoryIdentityProvider};
use cf_core::Identity;
use cf_db::{DbError, Filter, MemoryStore, PersistenceAdapter, Record, Result as DbResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

/// Memory provider that counts calls and can fail sign-out or session lookup.
#[derive(Default)]
pub struct ScriptedIdentity {
    pub inner: MemoryIdentityProvider,
    pub calls: AtomicUsize,
    pub fail_sign_out: AtomicBool,
    pub fail_get_session: AtomicBool,
    pub unavailable: AtomicBool,
}

impl ScriptedIdentity {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> IdentityResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(IdentityError::unavailable("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityAdapter for ScriptedIdentity {
    async fn sign_up(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        self.enter()?;
        self.inner.sign_up(email, password).await
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> IdentityResult<Identity> {
        self.enter()?;
        self.inner.sign_in_with_password(email, password).await
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        self.enter()?;
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(IdentityError::unavailable("network down"));
        }
        self.inner.sign_out().await
    }

    async fn get_session(&self) -> IdentityResult<Option<Identity>> {
        self.enter()?;
        if self.fail_get_session.load(Ordering::SeqCst) {
            return Err(IdentityError::rejected("session_expired", "refresh token expired"));
        }
        self.inner.get_session().await
    }
}

/// Memory table service with switchable failures.
pub struct FlakyPersistence {
    pub inner: Arc<MemoryStore>,
    pub fail_inserts: AtomicBool,
    pub fail_selects: AtomicBool,
}

impl FlakyPersistence {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            fail_inserts: AtomicBool::new(false),
            fail_selects: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl PersistenceAdapter for FlakyPersistence {
    async fn select(&self, table: &str, filter: &Filter) -> DbResult<Vec<Record>> {
        if self.fail_selects.load(Ordering::SeqCst) {
            return Err(DbError::unavailable("select timed out"));
        }
        self.inner.select(table, filter).await
    }

    async fn insert(&self, table: &str, records: Vec<Record>) -> DbResult<Vec<Record>> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DbError::rejected("42501", "row-level security violation"));
        }
        self.inner.insert(table, records).await
    }

    async fn update(&self, table: &str, id: &str, partial: Record) -> DbResult<Record> {
        self.inner.update(table, id, partial).await
    }

    async fn upsert(&self, table: &str, record: Record) -> DbResult<Record> {
        self.inner.upsert(table, record).await
    }
}
