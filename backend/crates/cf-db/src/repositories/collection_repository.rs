use crate::tables::COLLECTIONS;
use crate::{Filter, PersistenceAdapter, Result as DbErrorResult, from_record, to_record};

use cf_core::Collection;

use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Clone)]
pub struct CollectionRepository {
    adapter: Arc<dyn PersistenceAdapter>,
}

impl CollectionRepository {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn create(&self, collection: &Collection) -> DbErrorResult<Collection> {
        let record = to_record(collection)?;
        let mut inserted = self.adapter.insert(COLLECTIONS, vec![record]).await?;
        match inserted.pop() {
            Some(row) => from_record(row),
            None => Ok(collection.clone()),
        }
    }

    pub async fn list_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Collection>> {
        let filter = Filter::by("project_id", project_id.to_string());
        self.adapter
            .select(COLLECTIONS, &filter)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    /// Point the collection at its uploaded artwork
    pub async fn set_image_url(&self, id: Uuid, image_url: &str) -> DbErrorResult<Collection> {
        let mut partial = Map::new();
        partial.insert("image_url".to_string(), Value::String(image_url.to_string()));
        let row = self
            .adapter
            .update(COLLECTIONS, &id.to_string(), partial)
            .await?;
        from_record(row)
    }
}
