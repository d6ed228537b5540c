use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_round_trips_through_str() {
    for status in [
        ProjectStatus::Draft,
        ProjectStatus::Active,
        ProjectStatus::Funded,
        ProjectStatus::Completed,
    ] {
        assert_eq!(ProjectStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Draft);
}
