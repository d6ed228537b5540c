//! Profile repository over the `profiles` table.

use crate::tables::PROFILES;
use crate::{Filter, PersistenceAdapter, Result as DbErrorResult, from_record, to_record};

use cf_core::Profile;

use std::sync::Arc;

use uuid::Uuid;

#[derive(Clone)]
pub struct ProfileRepository {
    adapter: Arc<dyn PersistenceAdapter>,
}

impl ProfileRepository {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        self.find_one(Filter::by("id", id.to_string())).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Profile>> {
        self.find_one(Filter::by("email", email)).await
    }

    /// Insert a new profile. Fails with `Conflict` if one already exists for the id.
    pub async fn create(&self, profile: &Profile) -> DbErrorResult<Profile> {
        let record = to_record(profile)?;
        let mut inserted = self.adapter.insert(PROFILES, vec![record]).await?;
        match inserted.pop() {
            Some(row) => from_record(row),
            None => Ok(profile.clone()),
        }
    }

    /// "Not found" is an expected outcome here and comes back as `None`;
    /// every other adapter failure is propagated.
    async fn find_one(&self, filter: Filter) -> DbErrorResult<Option<Profile>> {
        match self.adapter.select_single(PROFILES, &filter).await {
            Ok(row) => from_record(row).map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
