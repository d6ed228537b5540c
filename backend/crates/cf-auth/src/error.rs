use crate::IdentityError;

use cf_core::{CoreError, PasswordRule, Role};
use cf_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Every failure the session layer surfaces to its caller.
///
/// Adapter errors are translated into this taxonomy at the store boundary;
/// transport details survive only in the `message` fields.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid login credentials {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Account is registered as '{account_role}', not '{requested_role}' {location}")]
    RoleMismatch {
        account_role: Role,
        requested_role: Role,
        location: ErrorLocation,
    },

    #[error("An account already exists for {email} {location}")]
    DuplicateAccount {
        email: String,
        location: ErrorLocation,
    },

    #[error("Profile creation failed for identity {identity_id}: {source} {location}")]
    ProfileCreationFailed {
        identity_id: Uuid,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Session restore failed: {message} {location}")]
    SessionRestoreFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Backend unavailable: {message} {location}")]
    AdapterUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Weak password: {} {location}", rule.message())]
    WeakPassword {
        rule: PasswordRule,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Backend rejected the request ({code}): {message} {location}")]
    Backend {
        code: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::DuplicateAccount { .. } => "DUPLICATE_ACCOUNT",
            Self::ProfileCreationFailed { .. } => "PROFILE_CREATION_FAILED",
            Self::SessionRestoreFailed { .. } => "SESSION_RESTORE_FAILED",
            Self::AdapterUnavailable { .. } => "ADAPTER_UNAVAILABLE",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Backend { .. } => "BACKEND_ERROR",
        }
    }

    /// Message shown to the person at the keyboard. Never carries locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredential { .. } => "Invalid email or password".to_string(),
            Self::RoleMismatch { account_role, .. } => match account_role {
                Role::Investor => {
                    "This account is registered as an investor. Please sign in as an investor."
                        .to_string()
                }
                Role::Project => {
                    "This account is registered as a project owner. Please sign in as a project owner."
                        .to_string()
                }
            },
            Self::DuplicateAccount { .. } => {
                "An account with this email already exists. Please sign in instead.".to_string()
            }
            Self::ProfileCreationFailed { .. } => {
                "Your account was created but its profile could not be saved. Please try signing in."
                    .to_string()
            }
            Self::SessionRestoreFailed { .. } => {
                "Your previous session could not be restored. Please sign in again.".to_string()
            }
            Self::AdapterUnavailable { .. } => {
                "The service is unreachable. Check your connection and try again.".to_string()
            }
            Self::WeakPassword { rule, .. } => rule.message().to_string(),
            Self::Unauthorized { message, .. } => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Backend { message, .. } => message.clone(),
        }
    }

    /// Creates InvalidCredential error at caller location.
    #[track_caller]
    pub fn invalid_credential() -> Self {
        Self::InvalidCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates RoleMismatch error at caller location.
    #[track_caller]
    pub fn role_mismatch(account_role: Role, requested_role: Role) -> Self {
        Self::RoleMismatch {
            account_role,
            requested_role,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ProfileCreationFailed error at caller location.
    #[track_caller]
    pub fn profile_creation_failed(identity_id: Uuid, source: DbError) -> Self {
        Self::ProfileCreationFailed {
            identity_id,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SessionRestoreFailed error at caller location.
    #[track_caller]
    pub fn session_restore_failed(message: impl Into<String>) -> Self {
        Self::SessionRestoreFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Unauthorized error at caller location.
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for AuthError {
    #[track_caller]
    fn from(err: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            IdentityError::InvalidCredential { .. } => Self::InvalidCredential { location },
            IdentityError::AlreadyRegistered { email, .. } => {
                Self::DuplicateAccount { email, location }
            }
            IdentityError::Rejected { code, message, .. } => Self::Backend {
                code,
                message,
                location,
            },
            IdentityError::Unavailable { message, .. } => {
                Self::AdapterUnavailable { message, location }
            }
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            DbError::Unavailable { message, .. } => Self::AdapterUnavailable { message, location },
            other => Self::Backend {
                code: other.error_code().to_string(),
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::WeakPassword { rule, .. } => Self::WeakPassword { rule, location },
            CoreError::Validation { field, message, .. } => Self::Validation {
                field,
                message,
                location,
            },
            other => Self::Validation {
                field: "value",
                message: other.user_message(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
