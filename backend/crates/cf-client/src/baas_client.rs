use crate::{ClientError, ClientResult};

use std::sync::RwLock;
use std::time::Duration;

use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde_json::Value;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for the auth, rest and storage endpoints.
pub struct BaasClient {
    pub base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
    client: ReqwestClient,
}

impl BaasClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abc.supabase.co")
    /// * `anon_key` - Public API key sent on every request
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: RwLock::new(None),
            client,
        })
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_access_token(&self, token: Option<String>) {
        *self
            .access_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    /// Absolute URL for `path` with `query` pairs percent-encoded.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| ClientError::invalid_url(raw.clone(), e.to_string()))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Build a request carrying the API key and the bearer token.
    ///
    /// Without a signed-in user the anon key doubles as the bearer token.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<RequestBuilder> {
        let url = self.url(path, query)?;
        debug!("{method} {url}");
        Ok(self
            .client
            .request(method, url)
            .headers(self.auth_headers()?))
    }

    /// Execute request and handle errors
    ///
    /// Empty bodies come back as `Value::Null`.
    pub async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                Err(_) if !status.is_success() => Value::String(text),
                Err(e) => return Err(e.into()),
            }
        };

        if !status.is_success() {
            let (code, message) = error_details(status.as_u16(), &body);
            return Err(ClientError::api(status.as_u16(), code, message));
        }

        Ok(body)
    }

    fn auth_headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value("apikey", &self.anon_key)?);
        let bearer = self.access_token().unwrap_or_else(|| self.anon_key.clone());
        headers.insert(
            AUTHORIZATION,
            header_value("authorization", &format!("Bearer {bearer}"))?,
        );
        Ok(headers)
    }
}

fn header_value(name: &'static str, value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| ClientError::invalid_header(name, e.to_string()))
}

/// Pull a machine code and a message out of an error body.
///
/// The auth, rest and storage services each shape errors differently:
/// `{"error_code", "msg"}`, `{"code", "message"}`, `{"error", "error_description"}`.
pub(crate) fn error_details(status: u16, body: &Value) -> (String, String) {
    let text = |key: &str| match body.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    };

    let code = text("error_code")
        .or_else(|| text("code"))
        .or_else(|| text("error"))
        .unwrap_or_else(|| status.to_string());
    let message = text("msg")
        .or_else(|| text("message"))
        .or_else(|| text("error_description"))
        .or_else(|| text("error"))
        .or_else(|| body.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));

    (code, message)
}
