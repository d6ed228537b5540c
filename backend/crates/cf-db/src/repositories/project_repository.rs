//! Project repository over the `projects` table.
//!
//! Each owner has at most one listing; `find_by_owner` returns the first
//! match rather than failing when legacy data holds more than one.

use crate::tables::PROJECTS;
use crate::{Filter, PersistenceAdapter, Result as DbErrorResult, from_record, to_record};

use cf_core::{Project, ProjectUpdate};

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectRepository {
    adapter: Arc<dyn PersistenceAdapter>,
}

impl ProjectRepository {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<Project> {
        let record = to_record(project)?;
        let mut inserted = self.adapter.insert(PROJECTS, vec![record]).await?;
        match inserted.pop() {
            Some(row) => from_record(row),
            None => Ok(project.clone()),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        self.first(Filter::by("id", id.to_string()).limit(1)).await
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Option<Project>> {
        self.first(Filter::by("owner_id", owner_id.to_string()).limit(1))
            .await
    }

    /// All listings, newest first
    pub async fn list(&self) -> DbErrorResult<Vec<Project>> {
        let filter = Filter::new().order_by("created_at", true);
        self.adapter
            .select(PROJECTS, &filter)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    /// Apply a partial update and bump `updated_at`.
    pub async fn update(&self, id: Uuid, update: &ProjectUpdate) -> DbErrorResult<Project> {
        let mut partial = to_record(update)?;
        partial.insert(
            "updated_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        let row = self
            .adapter
            .update(PROJECTS, &id.to_string(), partial)
            .await?;
        from_record(row)
    }

    /// Create or replace the whole listing.
    pub async fn upsert(&self, project: &Project) -> DbErrorResult<Project> {
        let mut project = project.clone();
        project.updated_at = Utc::now();
        let row = self.adapter.upsert(PROJECTS, to_record(&project)?).await?;
        from_record(row)
    }

    async fn first(&self, filter: Filter) -> DbErrorResult<Option<Project>> {
        let rows = self.adapter.select(PROJECTS, &filter).await?;
        rows.into_iter()
            .next()
            .map(from_record::<Project>)
            .transpose()
    }
}
