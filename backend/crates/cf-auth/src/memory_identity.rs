use crate::{IdentityAdapter, IdentityError, IdentityResult};

use cf_core::Identity;

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

struct Account {
    identity: Identity,
    password: String,
}

/// Identity provider kept in process memory.
///
/// Emails are matched case-insensitively. Sign-up opens a session right away,
/// as a provider without email confirmation does.
#[derive(Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    current: RwLock<Option<Identity>>,
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account without opening a session.
    pub async fn register(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        let key = normalize(email);
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(IdentityError::already_registered(key));
        }

        let identity = Identity::new(Uuid::new_v4(), key.clone());
        accounts.insert(
            key,
            Account {
                identity: identity.clone(),
                password: password.to_string(),
            },
        );
        Ok(identity)
    }
}

#[async_trait]
impl IdentityAdapter for MemoryIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        let identity = self.register(email, password).await?;
        debug!("sign_up {}", identity.email);
        *self.current.write().await = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> IdentityResult<Identity> {
        let identity = {
            let accounts = self.accounts.read().await;
            match accounts.get(&normalize(email)) {
                Some(account) if account.password == password => account.identity.clone(),
                _ => return Err(IdentityError::invalid_credential()),
            }
        };
        debug!("sign_in {}", identity.email);
        *self.current.write().await = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        *self.current.write().await = None;
        Ok(())
    }

    async fn get_session(&self) -> IdentityResult<Option<Identity>> {
        Ok(self.current.read().await.clone())
    }
}
