//! HTTP-level integration tests for site settings: defaults seeding,
//! key upserts, and bulk value saves.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

use beacon_core::settings::DEFAULT_SETTINGS;

/// Initialize seeds every default exactly once; a second call creates
/// nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_initialize_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    let response =
        post_json_auth(app.clone(), "/api/settings/initialize", serde_json::json!({}), &token)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        format!("Initialized {} default settings", DEFAULT_SETTINGS.len())
    );

    let response = get(app.clone(), "/api/settings").await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), DEFAULT_SETTINGS.len());

    let response =
        post_json_auth(app.clone(), "/api/settings/initialize", serde_json::json!({}), &token)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Initialized 0 default settings");

    let response = get(app, "/api/settings").await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), DEFAULT_SETTINGS.len());
}

/// Re-running initialize never clobbers an edited value.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_initialize_preserves_edits(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    post_json_auth(app.clone(), "/api/settings/initialize", serde_json::json!({}), &token).await;

    let body = serde_json::json!({ "settings": { "site_name": "Harbor Light Center" } });
    let response = put_json_auth(app.clone(), "/api/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    post_json_auth(app.clone(), "/api/settings/initialize", serde_json::json!({}), &token).await;

    let response = get(app, "/api/settings").await;
    let list = body_json(response).await;
    let site_name = list
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["key"] == "site_name")
        .expect("site_name should exist");
    assert_eq!(site_name["value"], "Harbor Light Center");
}

/// Upsert creates a key with metadata, then updates the value in place.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_upsert_by_key(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    let body = serde_json::json!({
        "key": "donation_url",
        "value": "https://example.org/donate",
        "value_type": "url",
        "category": "general",
        "label": "Donation link"
    });
    let response = post_json_auth(app.clone(), "/api/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["value_type"], "url");
    assert_eq!(created["label"], "Donation link");

    // Value-only upsert keeps the stored metadata.
    let body = serde_json::json!({ "key": "donation_url", "value": "https://example.org/give" });
    let response = post_json_auth(app, "/api/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["value"], "https://example.org/give");
    assert_eq!(updated["value_type"], "url");
    assert_eq!(updated["label"], "Donation link");
}

/// Upserting a brand-new key without metadata falls back to defaults.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_upsert_metadata_defaults(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    let body = serde_json::json!({ "key": "motto", "value": "Forward together" });
    let response = post_json_auth(app, "/api/settings", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["value_type"], "text");
    assert_eq!(created["category"], "general");
    assert_eq!(created["label"], "motto");
}

/// Bulk save replaces values, preserves metadata, and creates unknown
/// keys with plain-text metadata.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_bulk_update(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    post_json_auth(app.clone(), "/api/settings/initialize", serde_json::json!({}), &token).await;

    let body = serde_json::json!({
        "settings": {
            "facebook_url": "https://facebook.com/beacon",
            "volunteer_form_url": "https://example.org/volunteer"
        }
    });
    let response = put_json_auth(app.clone(), "/api/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let saved = body_json(response).await;
    let rows = saved.as_array().expect("bulk save should return the rows");
    assert_eq!(rows.len(), 2);

    let facebook = rows.iter().find(|s| s["key"] == "facebook_url").unwrap();
    assert_eq!(facebook["value"], "https://facebook.com/beacon");
    assert_eq!(facebook["value_type"], "url", "seeded metadata must survive");
    assert_eq!(facebook["updated_by"], "admin");

    let volunteer = rows.iter().find(|s| s["key"] == "volunteer_form_url").unwrap();
    assert_eq!(volunteer["value_type"], "text");
    assert_eq!(volunteer["label"], "volunteer_form_url");

    // An empty bulk save is rejected.
    let body = serde_json::json!({ "settings": {} });
    let response = put_json_auth(app, "/api/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The category query narrows the list to one editor group.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_category_filter(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    post_json_auth(app.clone(), "/api/settings/initialize", serde_json::json!({}), &token).await;

    let response = get(app.clone(), "/api/settings?category=social").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|s| s["category"] == "social"));

    let response = get(app, "/api/settings?category=nope").await;
    let list = body_json(response).await;
    assert!(list.as_array().unwrap().is_empty());
}

/// Delete by id returns a confirmation; a second delete is 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_delete(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::seed_admin_and_login(&pool, app.clone()).await;

    let body = serde_json::json!({ "key": "temp_key", "value": "temp" });
    let response = post_json_auth(app.clone(), "/api/settings", body, &token).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/settings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Setting deleted");

    let response = delete_auth(app, &format!("/api/settings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// All settings writes are behind the admin gate.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_writes_require_admin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "key": "site_name", "value": "X" });
    let response = post_json(app.clone(), "/api/settings", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(app, "/api/settings/initialize", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
