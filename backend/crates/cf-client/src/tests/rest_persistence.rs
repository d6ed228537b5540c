use crate::rest_persistence::filter_query;

use cf_db::Filter;

#[test]
fn test_filter_rendered_as_eq_pairs_with_order_and_limit() {
    let filter = Filter::by("owner_id", "42")
        .eq("status", "active")
        .order_by("created_at", true)
        .limit(1);

    let query = filter_query(&filter);

    assert_eq!(
        query,
        vec![
            ("select", "*".to_string()),
            ("owner_id", "eq.42".to_string()),
            ("status", "eq.active".to_string()),
            ("order", "created_at.desc".to_string()),
            ("limit", "1".to_string()),
        ]
    );
}

#[test]
fn test_null_and_numeric_conditions() {
    let filter = Filter::by("image_url", serde_json::Value::Null).eq("supply", 10);

    let query = filter_query(&filter);

    assert_eq!(query[1], ("image_url", "is.null".to_string()));
    assert_eq!(query[2], ("supply", "eq.10".to_string()));
}
