use crate::{Collection, CollectionDraft, CollectionStatus, CoreError};

use googletest::prelude::*;
use uuid::Uuid;

fn valid_draft() -> CollectionDraft {
    CollectionDraft {
        name: "Founders".to_string(),
        description: "First issuance".to_string(),
        price: 250.0,
        supply: 1_000,
        apy: 12.0,
        rules: vec!["Hold 12 months".to_string(), "  ".to_string()],
        ..Default::default()
    }
}

fn message_of(err: CoreError) -> String {
    err.user_message()
}

#[test]
fn given_valid_draft_when_validated_then_ok() {
    assert_that!(valid_draft().validate(), ok(anything()));
}

#[test]
fn given_zero_supply_and_negative_price_when_validated_then_supply_reported_first() {
    let draft = CollectionDraft {
        supply: 0,
        price: -1.0,
        ..valid_draft()
    };

    assert_that!(
        message_of(draft.validate().unwrap_err()),
        eq("The number of NFTs must be greater than 0")
    );
}

#[test]
fn given_negative_price_when_validated_then_price_error() {
    let draft = CollectionDraft {
        price: -0.01,
        ..valid_draft()
    };

    assert_that!(
        message_of(draft.validate().unwrap_err()),
        eq("Price must be positive")
    );
}

#[test]
fn given_infinite_price_when_validated_then_price_error() {
    let draft = CollectionDraft {
        price: f64::INFINITY,
        ..valid_draft()
    };

    assert_that!(
        message_of(draft.validate().unwrap_err()),
        eq("Price must be positive")
    );
}

#[test]
fn given_apy_out_of_range_when_validated_then_apy_error() {
    for apy in [-1.0, 100.5, f64::NAN] {
        let draft = CollectionDraft {
            apy,
            ..valid_draft()
        };

        assert_that!(
            message_of(draft.validate().unwrap_err()),
            eq("APY must be between 0 and 100%")
        );
    }
}

#[test]
fn given_draft_when_into_collection_then_blank_rules_dropped_and_nothing_sold() {
    let project_id = Uuid::new_v4();
    let collection = valid_draft().into_collection(project_id);

    assert_that!(collection.project_id, eq(project_id));
    assert_that!(collection.sold, eq(0));
    assert_that!(collection.status, eq(CollectionStatus::Active));
    assert_eq!(collection.rules, vec!["Hold 12 months".to_string()]);
    assert_that!(collection.minimum_lock_period, eq(12));
}

#[test]
fn given_file_name_when_image_path_then_keyed_by_collection_and_extension() {
    let collection: Collection = valid_draft().into_collection(Uuid::new_v4());

    let path = collection.image_path("artwork.final.png");

    assert_that!(path, eq(&format!("collections/{}/image.png", collection.id)));
}

#[test]
fn given_fully_sold_collection_then_reports_sold_out() {
    let mut collection = valid_draft().into_collection(Uuid::new_v4());
    collection.sold = collection.supply;

    assert_that!(collection.remaining(), eq(0));
    assert!(collection.is_sold_out());
}
