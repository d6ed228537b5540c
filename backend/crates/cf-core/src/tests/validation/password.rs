use crate::validation::password::first_violation;
use crate::{CoreError, PasswordRule, validate_password};

use googletest::prelude::*;

#[test]
fn given_strong_password_when_validated_then_ok() {
    assert_that!(validate_password("Abcdef12"), ok(anything()));
    assert_that!(first_violation("Abcdef12"), none());
}

#[test]
fn given_short_password_violating_everything_then_length_reported_first() {
    assert_that!(first_violation("!"), some(eq(PasswordRule::MinLength)));
}

#[test]
fn given_password_missing_uppercase_then_uppercase_reported() {
    assert_that!(first_violation("abcdef12"), some(eq(PasswordRule::Uppercase)));
}

#[test]
fn given_password_missing_lowercase_then_lowercase_reported() {
    assert_that!(first_violation("ABCDEF12"), some(eq(PasswordRule::Lowercase)));
}

#[test]
fn given_password_missing_digit_then_digit_reported() {
    assert_that!(first_violation("Abcdefgh"), some(eq(PasswordRule::Digit)));
}

#[test]
fn given_weak_password_when_validated_then_user_message_is_rule_message() {
    let err = validate_password("abcdefgh").unwrap_err();

    assert!(matches!(
        err,
        CoreError::WeakPassword {
            rule: PasswordRule::Uppercase,
            ..
        }
    ));
    assert_that!(
        err.user_message(),
        eq("Password must contain at least one uppercase letter")
    );
}
