//! Persistence adapter over the hosted REST table service.
//!
//! Filters become `column=eq.value` query pairs; ordering becomes
//! `order=column.desc`. Every write asks for the stored rows back.

use crate::{BaasClient, ClientError, ClientResult};

use cf_db::{DbError, Filter, PersistenceAdapter, Record, Result as DbErrorResult};

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

const PREFER_RETURN: &str = "return=representation";
const PREFER_UPSERT: &str = "resolution=merge-duplicates,return=representation";

/// Error code for "single row requested, none returned"
const NO_ROWS_CODE: &str = "PGRST116";
const UNIQUE_VIOLATION_CODE: &str = "23505";

pub struct RestPersistenceAdapter {
    client: Arc<BaasClient>,
}

impl RestPersistenceAdapter {
    pub fn new(client: Arc<BaasClient>) -> Self {
        Self { client }
    }

    fn table_path(table: &str) -> String {
        format!("/rest/v1/{table}")
    }

    async fn rows(
        &self,
        method: Method,
        table: &str,
        query: &[(&str, String)],
        prefer: Option<&str>,
        body: Option<Value>,
    ) -> ClientResult<Vec<Record>> {
        let mut req = self
            .client
            .request(method, &Self::table_path(table), query)?;
        if let Some(prefer) = prefer {
            req = req.header("Prefer", prefer);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        match self.client.execute(req).await? {
            Value::Array(rows) => Ok(rows
                .into_iter()
                .filter_map(|row| match row {
                    Value::Object(record) => Some(record),
                    _ => None,
                })
                .collect()),
            Value::Object(record) => Ok(vec![record]),
            _ => Ok(Vec::new()),
        }
    }
}

/// Render a filter as query pairs.
pub fn filter_query(filter: &Filter) -> Vec<(&str, String)> {
    let mut query = vec![("select", "*".to_string())];
    for (column, value) in filter.conditions() {
        let condition = match value {
            Value::Null => "is.null".to_string(),
            Value::String(s) => format!("eq.{s}"),
            other => format!("eq.{other}"),
        };
        query.push((column.as_str(), condition));
    }
    if let Some(order) = filter.order() {
        let direction = if order.descending { "desc" } else { "asc" };
        query.push(("order", format!("{}.{direction}", order.column)));
    }
    if let Some(limit) = filter.row_limit() {
        query.push(("limit", limit.to_string()));
    }
    query
}

/// Translate a transport failure into the persistence taxonomy.
fn db_error(err: ClientError, table: &str) -> DbError {
    match err {
        ClientError::Transport { message, .. } => DbError::unavailable(message),
        ClientError::Decode { source, .. } => source.into(),
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => match code.as_str() {
            NO_ROWS_CODE => DbError::not_found(table),
            UNIQUE_VIOLATION_CODE => DbError::conflict(table, message),
            _ if status == 409 => DbError::conflict(table, message),
            _ if status >= 500 => DbError::unavailable(message),
            _ => DbError::rejected(code, message),
        },
        other => DbError::rejected("CLIENT", other.to_string()),
    }
}

#[async_trait]
impl PersistenceAdapter for RestPersistenceAdapter {
    async fn select(&self, table: &str, filter: &Filter) -> DbErrorResult<Vec<Record>> {
        self.rows(Method::GET, table, &filter_query(filter), None, None)
            .await
            .map_err(|e| db_error(e, table))
    }

    async fn insert(&self, table: &str, records: Vec<Record>) -> DbErrorResult<Vec<Record>> {
        let body = Value::Array(records.into_iter().map(Value::Object).collect());
        self.rows(Method::POST, table, &[], Some(PREFER_RETURN), Some(body))
            .await
            .map_err(|e| db_error(e, table))
    }

    async fn update(&self, table: &str, id: &str, partial: Record) -> DbErrorResult<Record> {
        let query = [("id", format!("eq.{id}"))];
        let mut rows = self
            .rows(
                Method::PATCH,
                table,
                &query,
                Some(PREFER_RETURN),
                Some(Value::Object(partial)),
            )
            .await
            .map_err(|e| db_error(e, table))?;
        rows.pop().ok_or_else(|| DbError::not_found(table))
    }

    async fn upsert(&self, table: &str, record: Record) -> DbErrorResult<Record> {
        let body = Value::Array(vec![Value::Object(record.clone())]);
        let mut rows = self
            .rows(Method::POST, table, &[], Some(PREFER_UPSERT), Some(body))
            .await
            .map_err(|e| db_error(e, table))?;
        Ok(rows.pop().unwrap_or(record))
    }
}
