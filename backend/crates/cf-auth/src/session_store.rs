//! The session state machine.
//!
//! One `SessionStore` per running client. State lives in a `watch` channel so
//! UI code can either read it (`current`) or re-render on every transition
//! (`subscribe`). Callers serialize transitions by awaiting each operation.

use crate::{
    AuthError, IdentityAdapter, ProfileResolver, Result as AuthErrorResult, SeedReport, Session,
    SessionState, TestProjectSeeder,
};

use cf_core::{Identity, Role, validate_password};
use cf_db::PersistenceAdapter;

use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct SessionStore {
    identity: Arc<dyn IdentityAdapter>,
    profiles: ProfileResolver,
    seeder: Option<Arc<TestProjectSeeder>>,
    state: watch::Sender<SessionState>,
    backfills: Mutex<Vec<JoinHandle<SeedReport>>>,
}

impl SessionStore {
    pub fn new(identity: Arc<dyn IdentityAdapter>, persistence: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            identity,
            profiles: ProfileResolver::new(persistence),
            seeder: None,
            state: watch::Sender::new(SessionState::Unknown),
            backfills: Mutex::new(Vec::new()),
        }
    }

    /// Run `seeder` in the background whenever a project account signs in.
    pub fn with_seeder(mut self, seeder: Arc<TestProjectSeeder>) -> Self {
        self.seeder = Some(seeder);
        self
    }

    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition. Dropping it stops observation.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Leave `Unknown` by asking the identity provider for a live session.
    ///
    /// Only the first call does any work; afterwards the current state is
    /// returned unchanged. A session whose profile is missing ends in
    /// `Anonymous` and reports `SessionRestoreFailed`. Any other adapter
    /// failure is logged and also ends in `Anonymous`.
    pub async fn restore_session(&self) -> AuthErrorResult<SessionState> {
        if !self.current().is_unknown() {
            return Ok(self.current());
        }

        let identity = match self.identity.get_session().await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                debug!("No active session to restore");
                return Ok(self.transition(SessionState::Anonymous));
            }
            Err(e) => {
                warn!("Session lookup failed, continuing signed out: {e}");
                return Ok(self.transition(SessionState::Anonymous));
            }
        };

        match self.profiles.find(&identity).await {
            Ok(Some(profile)) => {
                let session = Session::new(identity, profile.role);
                info!("Restored session for {} as {}", session.identity.email, session.role);
                self.schedule_backfill(&session);
                Ok(self.transition(SessionState::Authenticated(session)))
            }
            Ok(None) => {
                warn!("Session for {} has no profile", identity.email);
                self.transition(SessionState::Anonymous);
                Err(AuthError::session_restore_failed(format!(
                    "no profile exists for {}",
                    identity.email
                )))
            }
            Err(e) => {
                warn!("Profile lookup failed, continuing signed out: {e}");
                Ok(self.transition(SessionState::Anonymous))
            }
        }
    }

    /// Sign an existing account in under `requested_role`.
    ///
    /// Bad credentials leave the state untouched. A profile with the other
    /// role fails with `RoleMismatch`; the provider session just opened is
    /// closed again and the store ends `Anonymous`.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        requested_role: Role,
    ) -> AuthErrorResult<Session> {
        let identity = self.identity.sign_in_with_password(email, password).await?;

        let profile = match self
            .profiles
            .resolve_for_sign_in(&identity, requested_role)
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                self.abandon_remote_session(&identity).await;
                return Err(e);
            }
        };

        let session = Session::new(identity, profile.role);
        info!("Signed in {} as {}", session.identity.email, session.role);
        self.schedule_backfill(&session);
        self.transition(SessionState::Authenticated(session.clone()));
        Ok(session)
    }

    /// Create an account and its profile, then sign it in.
    ///
    /// The password policy is checked before the provider is contacted. If
    /// the profile insert fails the identity stays orphaned at the provider.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        requested_role: Role,
    ) -> AuthErrorResult<Session> {
        validate_password(password)?;

        let identity = self.identity.sign_up(email, password).await?;

        let profile = match self.profiles.create(&identity, requested_role).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Identity {} created without a profile", identity.id);
                self.abandon_remote_session(&identity).await;
                return Err(e);
            }
        };

        let session = Session::new(identity, profile.role);
        info!("Signed up {} as {}", session.identity.email, session.role);
        self.schedule_backfill(&session);
        self.transition(SessionState::Authenticated(session.clone()));
        Ok(session)
    }

    /// Always ends `Anonymous`. A remote failure is returned after the local
    /// state has already been cleared.
    pub async fn sign_out(&self) -> AuthErrorResult<()> {
        let remote = self.identity.sign_out().await;
        self.transition(SessionState::Anonymous);

        match remote {
            Ok(()) => {
                info!("Signed out");
                Ok(())
            }
            Err(e) => {
                warn!("Remote sign-out failed, local session cleared anyway: {e}");
                Err(e.into())
            }
        }
    }

    /// Wait for every backfill started so far.
    pub async fn settle(&self) -> Vec<SeedReport> {
        let pending: Vec<_> = {
            let mut backfills = self
                .backfills
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            backfills.drain(..).collect()
        };

        let mut reports = Vec::with_capacity(pending.len());
        for handle in pending {
            match handle.await {
                Ok(report) => reports.push(report),
                Err(e) => warn!("Test project backfill task failed: {e}"),
            }
        }
        reports
    }

    fn transition(&self, next: SessionState) -> SessionState {
        self.state.send_replace(next.clone());
        next
    }

    async fn abandon_remote_session(&self, identity: &Identity) {
        if let Err(e) = self.identity.sign_out().await {
            warn!("Could not close provider session for {}: {e}", identity.email);
        }
        self.transition(SessionState::Anonymous);
    }

    fn schedule_backfill(&self, session: &Session) {
        let Some(seeder) = self.seeder.as_ref() else {
            return;
        };
        if session.role != Role::Project {
            return;
        }

        let seeder = Arc::clone(seeder);
        let handle = tokio::spawn(async move { seeder.run().await });
        self.backfills
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(handle);
    }
}
