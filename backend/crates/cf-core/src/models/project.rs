//! Project listing - the public page an owner publishes to raise funds.

use crate::{CoreError, ProjectStatus, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_APY: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub target_amount: f64,
    pub min_investment: f64,
    /// Annual percentage yield, 0-100
    pub apy: f64,
    /// Duration in months
    pub duration: i32,
    /// Funding progress, 0-100
    pub progress: i32,
    pub owner_id: Uuid,
    pub status: ProjectStatus,
    #[serde(default)]
    pub sections: Vec<ProjectSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Free-form content block on the public page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

/// Owner-supplied fields for a new listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub target_amount: f64,
    pub min_investment: f64,
    pub apy: f64,
    pub duration: i32,
    pub sections: Vec<ProjectSection>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_investment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ProjectSection>>,
}

impl ProjectDraft {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title", "Title is required"));
        }
        if !self.target_amount.is_finite() || self.target_amount < 0.0 {
            return Err(CoreError::validation(
                "target_amount",
                "Target amount must be positive",
            ));
        }
        if !self.min_investment.is_finite() || self.min_investment < 0.0 {
            return Err(CoreError::validation(
                "min_investment",
                "Minimum investment must be positive",
            ));
        }
        if self.min_investment > self.target_amount {
            return Err(CoreError::validation(
                "min_investment",
                "Minimum investment cannot exceed the target amount",
            ));
        }
        if !(0.0..=MAX_APY).contains(&self.apy) {
            return Err(CoreError::validation("apy", "APY must be between 0 and 100%"));
        }
        if self.duration < 1 {
            return Err(CoreError::validation(
                "duration",
                "Duration must be at least one month",
            ));
        }
        Ok(())
    }
}

impl Project {
    /// Create a new draft listing owned by `owner_id`
    pub fn new(draft: ProjectDraft, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            target_amount: draft.target_amount,
            min_investment: draft.min_investment,
            apy: draft.apy,
            duration: draft.duration,
            progress: 0,
            owner_id,
            status: ProjectStatus::Draft,
            sections: draft.sections,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_open_for_investment(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Amount raised so far, derived from the progress percentage
    pub fn raised_amount(&self) -> f64 {
        self.target_amount * f64::from(self.progress.clamp(0, 100)) / 100.0
    }
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
