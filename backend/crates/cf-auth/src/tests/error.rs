use crate::{AuthError, IdentityError};

use cf_core::{PasswordRule, Role, validate_password};
use cf_db::DbError;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_already_registered_when_converted_then_duplicate_account() {
    let err: AuthError = IdentityError::already_registered("a@x.com").into();

    assert!(matches!(err, AuthError::DuplicateAccount { ref email, .. } if email == "a@x.com"));
    assert_that!(
        err.user_message(),
        contains_substring("already exists")
    );
}

#[test]
fn given_unavailable_provider_when_converted_then_adapter_unavailable() {
    let err: AuthError = IdentityError::unavailable("connection refused").into();

    assert_that!(err.error_code(), eq("ADAPTER_UNAVAILABLE"));
}

#[test]
fn given_db_unavailable_when_converted_then_adapter_unavailable() {
    let err: AuthError = DbError::unavailable("timeout").into();

    assert_that!(err.error_code(), eq("ADAPTER_UNAVAILABLE"));
}

#[test]
fn given_db_rejection_when_converted_then_backend_keeps_db_code() {
    let err: AuthError = DbError::rejected("42501", "permission denied").into();

    assert!(matches!(err, AuthError::Backend { ref code, .. } if code == "REJECTED"));
}

#[test]
fn given_weak_password_when_converted_then_message_is_rule_message() {
    let err: AuthError = validate_password("short").unwrap_err().into();

    assert!(matches!(
        err,
        AuthError::WeakPassword {
            rule: PasswordRule::MinLength,
            ..
        }
    ));
    assert_that!(
        err.user_message(),
        eq("Password must contain at least 8 characters")
    );
}

#[test]
fn given_role_mismatch_when_displayed_then_names_account_role() {
    let err = AuthError::role_mismatch(Role::Project, Role::Investor);

    assert_that!(err.user_message(), contains_substring("project owner"));
    assert_that!(err.to_string(), contains_substring("'project', not 'investor'"));
}

#[test]
fn given_profile_creation_failure_when_displayed_then_source_preserved() {
    let id = Uuid::new_v4();
    let err = AuthError::profile_creation_failed(id, DbError::conflict("profiles", "duplicate"));

    assert_that!(err.error_code(), eq("PROFILE_CREATION_FAILED"));
    assert_that!(err.to_string(), contains_substring(id.to_string()));
    assert!(std::error::Error::source(&err).is_some());
}
