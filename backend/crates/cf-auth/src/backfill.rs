//! Idempotent seeding of demonstration projects for known test accounts.
//!
//! Each account is handled check-then-create: an owner that already has a
//! project is skipped. Two processes seeding at once can still both create;
//! within one process the in-flight set keeps runs for the same email apart.

use crate::Result as AuthErrorResult;

use cf_core::{Project, ProjectDraft, ProjectStatus, Role};
use cf_db::{PersistenceAdapter, ProfileRepository, ProjectRepository};

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use log::{debug, error, info};
use uuid::Uuid;

/// A test account and the listing it should own.
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub email: String,
    pub project: ProjectDraft,
    pub status: ProjectStatus,
    pub progress: i32,
}

pub fn default_seed_accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount {
            email: "admin2@projet.ch".to_string(),
            project: ProjectDraft {
                title: "Résidence AVP Paris".to_string(),
                description: "A premium residential development in the heart of Paris: \
                              20 luxury apartments with high-end finishes and amenities."
                    .to_string(),
                location: "Paris, France".to_string(),
                target_amount: 2_500_000.0,
                min_investment: 10_000.0,
                apy: 14.2,
                duration: 24,
                sections: Vec::new(),
            },
            status: ProjectStatus::Active,
            progress: 75,
        },
        SeedAccount {
            email: "admin3@projet.ch".to_string(),
            project: ProjectDraft {
                title: "Ferme Solaire".to_string(),
                description: "A renewable energy project installing solar panels \
                              across 50 hectares."
                    .to_string(),
                location: "Bordeaux, France".to_string(),
                target_amount: 1_800_000.0,
                min_investment: 5_000.0,
                apy: 15.5,
                duration: 36,
                sections: Vec::new(),
            },
            status: ProjectStatus::Active,
            progress: 60,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Created(Uuid),
    AlreadySeeded,
    /// No profile for the email yet; nothing to attach a project to.
    NoProfile,
    NotProjectAccount,
    /// Another run for the same email is in progress in this process.
    InFlight,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub outcomes: Vec<(String, SeedOutcome)>,
}

impl SeedReport {
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, SeedOutcome::Created(_)))
            .count()
    }

    pub fn outcome_for(&self, email: &str) -> Option<&SeedOutcome> {
        self.outcomes
            .iter()
            .find(|(seeded, _)| seeded == email)
            .map(|(_, outcome)| outcome)
    }
}

pub struct TestProjectSeeder {
    profiles: ProfileRepository,
    projects: ProjectRepository,
    accounts: Vec<SeedAccount>,
    in_flight: Mutex<HashSet<String>>,
}

impl TestProjectSeeder {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self::with_accounts(adapter, default_seed_accounts())
    }

    pub fn with_accounts(adapter: Arc<dyn PersistenceAdapter>, accounts: Vec<SeedAccount>) -> Self {
        Self {
            profiles: ProfileRepository::new(Arc::clone(&adapter)),
            projects: ProjectRepository::new(adapter),
            accounts,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn accounts(&self) -> &[SeedAccount] {
        &self.accounts
    }

    /// Seed every account in turn. Failures are recorded, never raised.
    pub async fn run(&self) -> SeedReport {
        let mut report = SeedReport::default();
        for account in &self.accounts {
            let outcome = self.seed_account(account).await;
            report.outcomes.push((account.email.clone(), outcome));
        }
        info!("Test project backfill finished: {} created", report.created());
        report
    }

    pub async fn seed_account(&self, account: &SeedAccount) -> SeedOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, &account.email) else {
            debug!("Backfill for {} already running", account.email);
            return SeedOutcome::InFlight;
        };

        match self.try_seed(account).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Backfill for {} failed: {e}", account.email);
                SeedOutcome::Failed(e.user_message())
            }
        }
    }

    async fn try_seed(&self, account: &SeedAccount) -> AuthErrorResult<SeedOutcome> {
        let Some(profile) = self.profiles.find_by_email(&account.email).await? else {
            return Ok(SeedOutcome::NoProfile);
        };
        if profile.role != Role::Project {
            return Ok(SeedOutcome::NotProjectAccount);
        }
        if self.projects.find_by_owner(profile.id).await?.is_some() {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut project = Project::new(account.project.clone(), profile.id);
        project.status = account.status;
        project.progress = account.progress;
        let created = self.projects.create(&project).await?;
        info!("Seeded project '{}' for {}", created.title, account.email);
        Ok(SeedOutcome::Created(created.id))
    }
}

struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    email: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, email: &str) -> Option<Self> {
        let inserted = set
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(email.to_string());
        inserted.then(|| Self {
            set,
            email: email.to_string(),
        })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.email);
    }
}
