//! Maps an authenticated identity to its application profile.

use crate::{AuthError, Result as AuthErrorResult};

use cf_core::{Identity, Profile, Role};
use cf_db::{DbError, PersistenceAdapter, ProfileRepository};

use std::sync::Arc;

use log::{info, warn};

#[derive(Clone)]
pub struct ProfileResolver {
    profiles: ProfileRepository,
}

impl ProfileResolver {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            profiles: ProfileRepository::new(adapter),
        }
    }

    /// Look the profile up by identity id. A missing profile is `None`.
    pub async fn find(&self, identity: &Identity) -> AuthErrorResult<Option<Profile>> {
        Ok(self.profiles.find_by_id(identity.id).await?)
    }

    /// Insert the one profile this identity will ever have.
    pub async fn create(&self, identity: &Identity, role: Role) -> AuthErrorResult<Profile> {
        let profile = Profile::for_identity(identity, role);
        self.profiles
            .create(&profile)
            .await
            .map_err(|e| AuthError::profile_creation_failed(identity.id, e))
    }

    /// Profile for a freshly signed-in identity.
    ///
    /// An existing profile must carry `requested`. A missing one is created
    /// with `requested`; if another client wins that insert, its row is
    /// re-read and checked like any existing profile.
    pub async fn resolve_for_sign_in(
        &self,
        identity: &Identity,
        requested: Role,
    ) -> AuthErrorResult<Profile> {
        if let Some(profile) = self.find(identity).await? {
            return Self::check_role(profile, requested);
        }

        info!("No profile for {}, creating one as {requested}", identity.email);
        match self.profiles.create(&Profile::for_identity(identity, requested)).await {
            Ok(profile) => Ok(profile),
            Err(e @ DbError::Conflict { .. }) => {
                warn!("Profile for {} appeared concurrently, re-reading", identity.email);
                match self.find(identity).await? {
                    Some(profile) => Self::check_role(profile, requested),
                    None => Err(AuthError::profile_creation_failed(identity.id, e)),
                }
            }
            Err(e) => Err(AuthError::profile_creation_failed(identity.id, e)),
        }
    }

    #[track_caller]
    fn check_role(profile: Profile, requested: Role) -> AuthErrorResult<Profile> {
        if profile.role == requested {
            Ok(profile)
        } else {
            Err(AuthError::role_mismatch(profile.role, requested))
        }
    }
}
