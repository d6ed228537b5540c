//! NFT-style investment collection issued by a project.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

const MAX_APY: f64 = 100.0;
const DEFAULT_LOCK_PERIOD_MONTHS: i32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub supply: i64,
    pub sold: i64,
    pub apy: f64,
    #[serde(default)]
    pub rules: Vec<String>,
    pub status: CollectionStatus,
    /// Months tokens must be held before transfer
    pub minimum_lock_period: i32,
    pub voting_rights: bool,
    pub revenue_share: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    #[default]
    Active,
    /// No longer accepting investments
    Closed,
}

/// Form input for a new collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub supply: i64,
    pub apy: f64,
    pub rules: Vec<String>,
    pub minimum_lock_period: i32,
    pub voting_rights: bool,
    pub revenue_share: bool,
}

impl Default for CollectionDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            supply: 0,
            apy: 0.0,
            rules: Vec::new(),
            minimum_lock_period: DEFAULT_LOCK_PERIOD_MONTHS,
            voting_rights: false,
            revenue_share: false,
        }
    }
}

impl CollectionDraft {
    /// Checks supply, then price, then APY; reports the first failure.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.supply < 1 {
            return Err(CoreError::validation(
                "supply",
                "The number of NFTs must be greater than 0",
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CoreError::validation("price", "Price must be positive"));
        }
        if !(0.0..=MAX_APY).contains(&self.apy) {
            return Err(CoreError::validation("apy", "APY must be between 0 and 100%"));
        }
        Ok(())
    }

    /// Build the record to insert. Blank rules are dropped.
    pub fn into_collection(self, project_id: Uuid) -> Collection {
        Collection {
            id: Uuid::new_v4(),
            project_id,
            name: self.name,
            description: self.description,
            price: self.price,
            supply: self.supply,
            sold: 0,
            apy: self.apy,
            rules: self
                .rules
                .into_iter()
                .filter(|rule| !rule.trim().is_empty())
                .collect(),
            status: CollectionStatus::Active,
            minimum_lock_period: self.minimum_lock_period,
            voting_rights: self.voting_rights,
            revenue_share: self.revenue_share,
            image_url: None,
            metadata: Map::new(),
        }
    }
}

impl Collection {
    /// Storage path for the collection artwork, keyed by the uploaded file's extension.
    pub fn image_path(&self, file_name: &str) -> String {
        let ext = file_name.rsplit('.').next().unwrap_or(file_name);
        format!("collections/{}/image.{}", self.id, ext)
    }

    pub fn remaining(&self) -> i64 {
        (self.supply - self.sold).max(0)
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining() == 0
    }
}

impl CollectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for CollectionStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            _ => Err(CoreError::InvalidCollectionStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
