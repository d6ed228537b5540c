use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account type chosen at sign-up. Fixed for the lifetime of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Browses the marketplace and buys into collections
    Investor,
    /// Owns a project listing and issues collections
    Project,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Investor, Role::Project];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Project => "project",
        }
    }

    /// Location of the dashboard this role lands on after sign-in.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Investor => "/dashboard/investor",
            Self::Project => "/dashboard/project",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "investor" => Ok(Self::Investor),
            "project" => Ok(Self::Project),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
