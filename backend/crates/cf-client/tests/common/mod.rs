#![allow(dead_code)]

use cf_client::BaasClient;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const ANON_KEY: &str = "anon-key";
pub const USER_ID: &str = "00000000-0000-0000-0000-0000000000a1";

pub fn create_client(server: &MockServer) -> Arc<BaasClient> {
    Arc::new(BaasClient::new(&server.uri(), ANON_KEY, Duration::from_secs(5)).unwrap())
}

pub fn user_json(email: &str) -> Value {
    json!({
        "id": USER_ID,
        "aud": "authenticated",
        "email": email,
        "user_metadata": {"name": "Ada"},
        "identities": [{"provider": "email"}]
    })
}

pub fn session_json(email: &str) -> Value {
    json!({
        "access_token": "user-jwt",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh",
        "user": user_json(email)
    })
}
