//! Password-strength policy applied before an account is created.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

const MIN_PASSWORD_LENGTH: usize = 8;

/// One rule of the policy. Rules are evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 4] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Self::MinLength => "Password must contain at least 8 characters",
            Self::Uppercase => "Password must contain at least one uppercase letter",
            Self::Lowercase => "Password must contain at least one lowercase letter",
            Self::Digit => "Password must contain at least one digit",
        }
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

/// Returns the first rule the password violates, if any.
pub fn first_violation(password: &str) -> Option<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(password))
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    match first_violation(password) {
        Some(rule) => Err(CoreError::WeakPassword {
            rule,
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(()),
    }
}
