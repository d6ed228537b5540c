//! Boundary to the backend's table service.

use crate::{DbError, Filter, Result as DbErrorResult};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One row, as a JSON object keyed by column name.
pub type Record = Map<String, Value>;

/// Generic create/read/update over named tables.
///
/// Implementations translate their transport failures into [`DbError`]
/// before returning; "no matching row" is always [`DbError::NotFound`].
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Rows matching `filter`. An empty result is not an error.
    async fn select(&self, table: &str, filter: &Filter) -> DbErrorResult<Vec<Record>>;

    /// Insert rows and return them as stored.
    async fn insert(&self, table: &str, records: Vec<Record>) -> DbErrorResult<Vec<Record>>;

    /// Merge `partial` into the row whose `id` column equals `id`.
    async fn update(&self, table: &str, id: &str, partial: Record) -> DbErrorResult<Record>;

    /// Insert, or merge into the existing row with the same `id`.
    async fn upsert(&self, table: &str, record: Record) -> DbErrorResult<Record>;

    /// Exactly one row matching `filter`.
    async fn select_single(&self, table: &str, filter: &Filter) -> DbErrorResult<Record> {
        let mut rows = self.select(table, filter).await?;
        match rows.len() {
            0 => Err(DbError::not_found(table)),
            1 => Ok(rows.remove(0)),
            n => Err(DbError::rejected(
                "MULTIPLE_ROWS",
                format!("expected a single row from '{table}', got {n}"),
            )),
        }
    }
}

#[track_caller]
pub fn to_record<T: Serialize>(value: &T) -> DbErrorResult<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(DbError::rejected(
            "NOT_AN_OBJECT",
            format!("expected a JSON object, got {other}"),
        )),
    }
}

#[track_caller]
pub fn from_record<T: DeserializeOwned>(record: Record) -> DbErrorResult<T> {
    Ok(serde_json::from_value(Value::Object(record))?)
}
