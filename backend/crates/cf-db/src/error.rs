use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by the persistence and storage adapters.
///
/// Every variant maps to a stable code via [`DbError::error_code`], so callers
/// can branch on "not found" without inspecting messages.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("No row in '{table}' matched the filter {location}")]
    NotFound {
        table: String,
        location: ErrorLocation,
    },

    #[error("Conflict in '{table}': {message} {location}")]
    Conflict {
        table: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Request rejected ({code}): {message} {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Backend unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record (de)serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl DbError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Rejected { .. } => "REJECTED",
            Self::Unavailable { .. } => "UNAVAILABLE",
            Self::Serialization { .. } => "SERIALIZATION",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(table: impl Into<String>) -> Self {
        Self::NotFound {
            table: table.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Conflict error at caller location.
    #[track_caller]
    pub fn conflict(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            table: table.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Rejected error at caller location.
    #[track_caller]
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Unavailable error at caller location.
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
