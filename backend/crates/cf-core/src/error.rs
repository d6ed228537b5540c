use crate::PasswordRule;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Weak password: {} {location}", rule.message())]
    WeakPassword {
        rule: PasswordRule,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid collection status: {value} {location}")]
    InvalidCollectionStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error at caller location.
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for display next to the offending form field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::WeakPassword { rule, .. } => rule.message().to_string(),
            Self::InvalidRole { value, .. } => format!("Unknown account type '{value}'"),
            Self::InvalidProjectStatus { value, .. } => {
                format!("Unknown project status '{value}'")
            }
            Self::InvalidCollectionStatus { value, .. } => {
                format!("Unknown collection status '{value}'")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
