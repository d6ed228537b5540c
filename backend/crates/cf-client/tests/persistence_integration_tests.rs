//! Table and storage endpoints, against a mock server.

mod common;

use common::{ANON_KEY, create_client};

use cf_client::{RestPersistenceAdapter, RestStorageAdapter};
use cf_db::{DbError, Filter, PersistenceAdapter, StorageAdapter};

use serde_json::{Map, Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn record(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_select_renders_filter_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(header("apikey", ANON_KEY))
        .and(query_param("owner_id", "eq.42"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "owner_id": "42"},
            {"id": "p2", "owner_id": "42"}
        ])))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let rows = adapter
        .select(
            "projects",
            &Filter::by("owner_id", "42").order_by("created_at", true),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "p1");
}

#[tokio::test]
async fn test_select_single_with_no_rows_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let err = adapter
        .select_single("profiles", &Filter::by("id", "missing"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_no_rows_code_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let err = adapter
        .select("profiles", &Filter::by("id", "missing"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_insert_asks_for_representation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!([{"id": "u1", "email": "a@x.com", "role": "investor"}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": "u1", "email": "a@x.com", "role": "investor"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let rows = adapter
        .insert(
            "profiles",
            vec![record(json!({"id": "u1", "email": "a@x.com", "role": "investor"}))],
        )
        .await
        .unwrap();

    assert_eq!(rows[0]["role"], "investor");
}

#[tokio::test]
async fn test_unique_violation_is_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"profiles_pkey\""
        })))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let result = adapter
        .insert("profiles", vec![record(json!({"id": "u1"}))])
        .await;

    assert!(matches!(result, Err(DbError::Conflict { .. })));
}

#[tokio::test]
async fn test_update_patches_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/collections"))
        .and(query_param("id", "eq.c1"))
        .and(body_json(json!({"image_url": "collections/c1/image.png"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c1", "image_url": "collections/c1/image.png"}
        ])))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let row = adapter
        .update(
            "collections",
            "c1",
            record(json!({"image_url": "collections/c1/image.png"})),
        )
        .await
        .unwrap();

    assert_eq!(row["image_url"], "collections/c1/image.png");
}

#[tokio::test]
async fn test_update_matching_nothing_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let err = adapter
        .update("collections", "nope", record(json!({"sold": 1})))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_upsert_merges_duplicates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .and(header(
            "prefer",
            "resolution=merge-duplicates,return=representation",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": "p1", "title": "Ferme Solaire"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let row = adapter
        .upsert("projects", record(json!({"id": "p1", "title": "Ferme Solaire"})))
        .await
        .unwrap();

    assert_eq!(row["title"], "Ferme Solaire");
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let adapter = RestPersistenceAdapter::new(create_client(&mock_server));
    let err = adapter
        .select("projects", &Filter::new())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "UNAVAILABLE");
}

#[tokio::test]
async fn test_upload_posts_bytes_with_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/storage/v1/object/nft-images/collections/c1/image.png"))
        .and(header("content-type", "image/png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Key": "nft-images/collections/c1/image.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = RestStorageAdapter::new(create_client(&mock_server));
    adapter
        .upload(
            "nft-images",
            "collections/c1/image.png",
            vec![1, 2, 3],
            "image/png",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_existing_object_is_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/storage/v1/object/nft-images/collections/c1/image.png"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": "409",
            "error": "Duplicate",
            "message": "The resource already exists"
        })))
        .mount(&mock_server)
        .await;

    let adapter = RestStorageAdapter::new(create_client(&mock_server));
    let result = adapter
        .upload("nft-images", "collections/c1/image.png", vec![1], "image/png")
        .await;

    assert!(matches!(result, Err(DbError::Conflict { .. })));
}
