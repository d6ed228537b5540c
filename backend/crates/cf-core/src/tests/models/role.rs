use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Investor.as_str(), "investor");
    assert_eq!(Role::Project.as_str(), "project");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("investor").unwrap(), Role::Investor);
    assert_eq!(Role::from_str("project").unwrap(), Role::Project);
    assert!(matches!(
        Role::from_str("admin"),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn test_role_dashboard_path() {
    assert_eq!(Role::Investor.dashboard_path(), "/dashboard/investor");
    assert_eq!(Role::Project.dashboard_path(), "/dashboard/project");
}

#[test]
fn test_role_serde_uses_lowercase() {
    let json = serde_json::to_string(&Role::Project).unwrap();
    assert_eq!(json, "\"project\"");

    let role: Role = serde_json::from_str("\"investor\"").unwrap();
    assert_eq!(role, Role::Investor);
}
