//! Operations a project owner performs on their own listing.

use crate::{AuthError, Result as AuthErrorResult, SessionState, require_role};

use cf_core::{Collection, CollectionDraft, Project, ProjectDraft, ProjectUpdate, Role};
use cf_db::tables::NFT_IMAGES_BUCKET;
use cf_db::{CollectionRepository, PersistenceAdapter, ProjectRepository, StorageAdapter};

use std::sync::Arc;

use log::info;

/// Artwork attached to a new collection.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

pub struct OwnerWorkspace {
    projects: ProjectRepository,
    collections: CollectionRepository,
    storage: Arc<dyn StorageAdapter>,
    bucket: String,
}

impl OwnerWorkspace {
    pub fn new(persistence: Arc<dyn PersistenceAdapter>, storage: Arc<dyn StorageAdapter>) -> Self {
        Self {
            projects: ProjectRepository::new(Arc::clone(&persistence)),
            collections: CollectionRepository::new(persistence),
            storage,
            bucket: NFT_IMAGES_BUCKET.to_string(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Every listing, newest first. Open to anyone.
    pub async fn list_projects(&self) -> AuthErrorResult<Vec<Project>> {
        Ok(self.projects.list().await?)
    }

    pub async fn my_project(&self, state: &SessionState) -> AuthErrorResult<Option<Project>> {
        let session = require_role(state, Role::Project)?;
        Ok(self.projects.find_by_owner(session.identity.id).await?)
    }

    /// Create the owner's listing, or overwrite its editable fields.
    pub async fn save_project(
        &self,
        state: &SessionState,
        draft: ProjectDraft,
    ) -> AuthErrorResult<Project> {
        let session = require_role(state, Role::Project)?;
        draft.validate()?;

        match self.projects.find_by_owner(session.identity.id).await? {
            Some(existing) => {
                let update = ProjectUpdate {
                    title: Some(draft.title),
                    description: Some(draft.description),
                    location: Some(draft.location),
                    target_amount: Some(draft.target_amount),
                    min_investment: Some(draft.min_investment),
                    apy: Some(draft.apy),
                    duration: Some(draft.duration),
                    sections: Some(draft.sections),
                    ..ProjectUpdate::default()
                };
                let updated = self.projects.update(existing.id, &update).await?;
                info!("Updated project {} for {}", updated.id, session.identity.email);
                Ok(updated)
            }
            None => {
                let project = Project::new(draft, session.identity.id);
                let created = self.projects.create(&project).await?;
                info!("Created project {} for {}", created.id, session.identity.email);
                Ok(created)
            }
        }
    }

    /// Issue a collection against the owner's project.
    ///
    /// The row is written first; the image is then uploaded under the new id
    /// and linked. A failed upload leaves the collection without an image.
    pub async fn create_collection(
        &self,
        state: &SessionState,
        draft: CollectionDraft,
        image: Option<ImageUpload>,
    ) -> AuthErrorResult<Collection> {
        let session = require_role(state, Role::Project)?;
        draft.validate()?;

        let project = self
            .projects
            .find_by_owner(session.identity.id)
            .await?
            .ok_or_else(|| {
                AuthError::validation(
                    "project",
                    "Create your project page before issuing collections",
                )
            })?;

        let collection = self
            .collections
            .create(&draft.into_collection(project.id))
            .await?;
        info!("Created collection {} on project {}", collection.id, project.id);

        let Some(image) = image else {
            return Ok(collection);
        };

        let path = collection.image_path(&image.file_name);
        self.storage
            .upload(&self.bucket, &path, image.bytes, &image.content_type)
            .await?;
        Ok(self.collections.set_image_url(collection.id, &path).await?)
    }

    pub async fn list_collections(&self, state: &SessionState) -> AuthErrorResult<Vec<Collection>> {
        let session = require_role(state, Role::Project)?;
        match self.projects.find_by_owner(session.identity.id).await? {
            Some(project) => Ok(self.collections.list_by_project(project.id).await?),
            None => Ok(Vec::new()),
        }
    }
}
