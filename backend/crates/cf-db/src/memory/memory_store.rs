use crate::{DbError, Filter, PersistenceAdapter, Record, Result as DbErrorResult};

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

const ID_COLUMN: &str = "id";

/// Table service held entirely in memory.
///
/// Rows are keyed by their `id` column; inserts without an id get a fresh
/// UUID, mirroring the backend's column default.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored in `table`
    pub async fn count(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, Vec::len)
    }
}

fn row_id(record: &Record) -> Option<&Value> {
    record.get(ID_COLUMN).filter(|v| !v.is_null())
}

#[async_trait]
impl PersistenceAdapter for MemoryStore {
    async fn select(&self, table: &str, filter: &Filter) -> DbErrorResult<Vec<Record>> {
        let tables = self.tables.read().await;
        let rows = tables.get(table).map(|rows| filter.apply(rows)).unwrap_or_default();
        debug!("select {table}: {} row(s)", rows.len());
        Ok(rows)
    }

    async fn insert(&self, table: &str, records: Vec<Record>) -> DbErrorResult<Vec<Record>> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.to_string()).or_default();

        let mut prepared = Vec::with_capacity(records.len());
        for mut record in records {
            if row_id(&record).is_none() {
                record.insert(
                    ID_COLUMN.to_string(),
                    Value::String(Uuid::new_v4().to_string()),
                );
            }
            let id = record.get(ID_COLUMN).cloned();
            let duplicate = rows.iter().chain(prepared.iter()).any(|row: &Record| {
                row.get(ID_COLUMN) == id.as_ref()
            });
            if duplicate {
                return Err(DbError::conflict(
                    table,
                    format!("duplicate key value for id {}", id.unwrap_or(Value::Null)),
                ));
            }
            prepared.push(record);
        }

        rows.extend(prepared.iter().cloned());
        debug!("insert {table}: {} row(s)", prepared.len());
        Ok(prepared)
    }

    async fn update(&self, table: &str, id: &str, partial: Record) -> DbErrorResult<Record> {
        let mut tables = self.tables.write().await;
        let key = Value::String(id.to_string());
        let row = tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|row| row.get(ID_COLUMN) == Some(&key)))
            .ok_or_else(|| DbError::not_found(table))?;

        for (column, value) in partial {
            if column != ID_COLUMN {
                row.insert(column, value);
            }
        }
        debug!("update {table}: {id}");
        Ok(row.clone())
    }

    async fn upsert(&self, table: &str, record: Record) -> DbErrorResult<Record> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.to_string()).or_default();

        let position = row_id(&record)
            .and_then(|id| rows.iter().position(|row| row.get(ID_COLUMN) == Some(id)));

        let stored = match position {
            Some(index) => {
                let row = &mut rows[index];
                row.extend(record);
                row.clone()
            }
            None => {
                let mut record = record;
                if row_id(&record).is_none() {
                    record.insert(
                        ID_COLUMN.to_string(),
                        Value::String(Uuid::new_v4().to_string()),
                    );
                }
                rows.push(record.clone());
                record
            }
        };
        debug!("upsert {table}");
        Ok(stored)
    }
}
