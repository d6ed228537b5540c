//! Identity adapter over the hosted auth service.

use crate::{BaasClient, ClientError};

use cf_auth::{IdentityAdapter, IdentityError, IdentityResult};
use cf_core::Identity;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct RestIdentityAdapter {
    client: Arc<BaasClient>,
}

impl RestIdentityAdapter {
    pub fn new(client: Arc<BaasClient>) -> Self {
        Self { client }
    }

    /// Keep the session token from an auth response and return its user.
    fn accept_session(&self, body: Value) -> IdentityResult<Value> {
        match body.get("access_token").and_then(Value::as_str) {
            Some(token) => {
                self.client.set_access_token(Some(token.to_string()));
                Ok(body.get("user").cloned().unwrap_or(Value::Null))
            }
            None => Ok(body),
        }
    }
}

fn parse_identity(user: Value) -> IdentityResult<Identity> {
    serde_json::from_value(user).map_err(|e| {
        IdentityError::rejected("INVALID_RESPONSE", format!("malformed user object: {e}"))
    })
}

/// Translate a transport failure into the identity taxonomy.
fn identity_error(err: ClientError, email: &str) -> IdentityError {
    match err {
        ClientError::Transport { message, .. } => IdentityError::unavailable(message),
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            if matches!(code.as_str(), "user_already_exists" | "email_exists")
                || message.contains("already registered")
            {
                IdentityError::already_registered(email)
            } else if matches!(code.as_str(), "invalid_credentials" | "invalid_grant") {
                IdentityError::invalid_credential()
            } else if status >= 500 {
                IdentityError::unavailable(message)
            } else {
                IdentityError::rejected(code, message)
            }
        }
        other => IdentityError::rejected("INVALID_RESPONSE", other.to_string()),
    }
}

#[async_trait]
impl IdentityAdapter for RestIdentityAdapter {
    async fn sign_up(&self, email: &str, password: &str) -> IdentityResult<Identity> {
        let req = self
            .client
            .request(Method::POST, "/auth/v1/signup", &[])
            .map_err(|e| identity_error(e, email))?
            .json(&Credentials { email, password });
        let body = self
            .client
            .execute(req)
            .await
            .map_err(|e| identity_error(e, email))?;

        let user = self.accept_session(body)?;
        // With email confirmation on, an existing address is answered with a
        // placeholder user that has no identities.
        if user
            .get("identities")
            .and_then(Value::as_array)
            .is_some_and(|identities| identities.is_empty())
        {
            return Err(IdentityError::already_registered(email));
        }
        parse_identity(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> IdentityResult<Identity> {
        let req = self
            .client
            .request(
                Method::POST,
                "/auth/v1/token",
                &[("grant_type", "password".to_string())],
            )
            .map_err(|e| identity_error(e, email))?
            .json(&Credentials { email, password });

        let body = match self.client.execute(req).await {
            Ok(body) => body,
            Err(e) if e.status() == Some(400) => {
                debug!("Password grant rejected for {email}: {e}");
                return Err(IdentityError::invalid_credential());
            }
            Err(e) => return Err(identity_error(e, email)),
        };

        let user = self.accept_session(body)?;
        parse_identity(user)
    }

    /// The local token is dropped even if the revoke call fails.
    async fn sign_out(&self) -> IdentityResult<()> {
        if self.client.access_token().is_none() {
            return Ok(());
        }

        let result = match self.client.request(Method::POST, "/auth/v1/logout", &[]) {
            Ok(req) => self.client.execute(req).await.map(|_| ()),
            Err(e) => Err(e),
        };
        self.client.set_access_token(None);
        result.map_err(|e| identity_error(e, ""))
    }

    async fn get_session(&self) -> IdentityResult<Option<Identity>> {
        if self.client.access_token().is_none() {
            return Ok(None);
        }

        let req = self
            .client
            .request(Method::GET, "/auth/v1/user", &[])
            .map_err(|e| identity_error(e, ""))?;
        match self.client.execute(req).await {
            Ok(user) => parse_identity(user).map(Some),
            Err(e) if matches!(e.status(), Some(401 | 403)) => {
                warn!("Stored access token rejected, treating as signed out: {e}");
                self.client.set_access_token(None);
                Ok(None)
            }
            Err(e) => Err(identity_error(e, "")),
        }
    }
}
