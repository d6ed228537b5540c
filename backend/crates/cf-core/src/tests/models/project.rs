use crate::{CoreError, Project, ProjectDraft, ProjectStatus, ProjectUpdate};

use googletest::prelude::*;
use uuid::Uuid;

fn valid_draft() -> ProjectDraft {
    ProjectDraft {
        title: "Solar Farm".to_string(),
        description: "50 hectares of panels".to_string(),
        location: "Bordeaux, France".to_string(),
        target_amount: 1_800_000.0,
        min_investment: 5_000.0,
        apy: 15.5,
        duration: 36,
        sections: vec![],
    }
}

fn field_of(err: CoreError) -> &'static str {
    match err {
        CoreError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn given_valid_draft_when_validated_then_ok() {
    assert_that!(valid_draft().validate(), ok(anything()));
}

#[test]
fn given_blank_title_when_validated_then_title_error() {
    let draft = ProjectDraft {
        title: "   ".to_string(),
        ..valid_draft()
    };

    assert_that!(field_of(draft.validate().unwrap_err()), eq("title"));
}

#[test]
fn given_min_investment_above_target_when_validated_then_min_investment_error() {
    let draft = ProjectDraft {
        min_investment: 2_000_000.0,
        ..valid_draft()
    };

    assert_that!(field_of(draft.validate().unwrap_err()), eq("min_investment"));
}

#[test]
fn given_infinite_target_when_validated_then_target_amount_error() {
    let draft = ProjectDraft {
        target_amount: f64::INFINITY,
        ..valid_draft()
    };

    assert_that!(field_of(draft.validate().unwrap_err()), eq("target_amount"));
}

#[test]
fn given_non_finite_min_investment_when_validated_then_min_investment_error() {
    for min_investment in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let draft = ProjectDraft {
            min_investment,
            ..valid_draft()
        };

        assert_that!(field_of(draft.validate().unwrap_err()), eq("min_investment"));
    }
}

#[test]
fn given_apy_over_100_when_validated_then_apy_error() {
    let draft = ProjectDraft {
        apy: 120.0,
        ..valid_draft()
    };

    assert_that!(field_of(draft.validate().unwrap_err()), eq("apy"));
}

#[test]
fn given_zero_duration_when_validated_then_duration_error() {
    let draft = ProjectDraft {
        duration: 0,
        ..valid_draft()
    };

    assert_that!(field_of(draft.validate().unwrap_err()), eq("duration"));
}

#[test]
fn given_new_project_then_starts_as_draft_with_zero_progress() {
    let owner = Uuid::new_v4();
    let project = Project::new(valid_draft(), owner);

    assert_that!(project.status, eq(ProjectStatus::Draft));
    assert_that!(project.progress, eq(0));
    assert_that!(project.owner_id, eq(owner));
    assert!(!project.is_open_for_investment());
}

#[test]
fn given_progress_when_raised_amount_then_proportional_to_target() {
    let mut project = Project::new(valid_draft(), Uuid::new_v4());
    project.progress = 60;

    assert_that!(project.raised_amount(), eq(1_080_000.0));
}

#[test]
fn given_partial_update_when_serialized_then_only_set_fields_present() {
    let update = ProjectUpdate {
        title: Some("New title".to_string()),
        status: Some(ProjectStatus::Active),
        ..Default::default()
    };

    let json = serde_json::to_value(&update).unwrap();
    let object = json.as_object().unwrap();

    assert_that!(object.len(), eq(2));
    assert_eq!(json["status"], serde_json::json!("active"));
    assert!(!update.is_empty());
    assert!(ProjectUpdate::default().is_empty());
}
