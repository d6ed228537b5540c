use crate::{BaasClient, ClientError};

use cf_db::{DbError, Result as DbErrorResult, StorageAdapter};

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

/// Object storage adapter; uploads never overwrite.
pub struct RestStorageAdapter {
    client: Arc<BaasClient>,
}

impl RestStorageAdapter {
    pub fn new(client: Arc<BaasClient>) -> Self {
        Self { client }
    }
}

fn storage_error(err: ClientError, bucket: &str) -> DbError {
    match err {
        ClientError::Transport { message, .. } => DbError::unavailable(message),
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            // Storage reports its HTTP status inside the body as a string.
            if status == 409 || code == "409" || code == "Duplicate" {
                DbError::conflict(bucket, message)
            } else if status == 404 || code == "404" {
                DbError::not_found(bucket)
            } else if status >= 500 {
                DbError::unavailable(message)
            } else {
                DbError::rejected(code, message)
            }
        }
        other => DbError::rejected("CLIENT", other.to_string()),
    }
}

#[async_trait]
impl StorageAdapter for RestStorageAdapter {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> DbErrorResult<()> {
        let object_path = format!("/storage/v1/object/{bucket}/{}", path.trim_start_matches('/'));
        let req = self
            .client
            .request(Method::POST, &object_path, &[])
            .map_err(|e| storage_error(e, bucket))?
            .header(CONTENT_TYPE, content_type)
            .body(bytes);

        self.client
            .execute(req)
            .await
            .map(|_| ())
            .map_err(|e| storage_error(e, bucket))
    }
}
