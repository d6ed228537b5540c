//! Boundary to the external identity provider.

use cf_core::Identity;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

/// Provider failures, already classified by the adapter.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Invalid login credentials {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("User already registered: {email} {location}")]
    AlreadyRegistered {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity provider rejected the request ({code}): {message} {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Creates InvalidCredential error at caller location.
    #[track_caller]
    pub fn invalid_credential() -> Self {
        Self::InvalidCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AlreadyRegistered error at caller location.
    #[track_caller]
    pub fn already_registered(email: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            email: email.into(),
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

pub type IdentityResult<T> = std::result::Result<T, IdentityError>;

/// Sign-up, sign-in, sign-out and session lookup against the provider.
///
/// A successful `sign_up` or `sign_in_with_password` also opens the
/// provider-side session that `get_session` reports afterwards.
#[async_trait]
pub trait IdentityAdapter: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> IdentityResult<Identity>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> IdentityResult<Identity>;

    async fn sign_out(&self) -> IdentityResult<()>;

    /// The identity behind the provider's current session, if any.
    async fn get_session(&self) -> IdentityResult<Option<Identity>>;
}
