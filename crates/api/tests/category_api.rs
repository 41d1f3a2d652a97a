//! HTTP-level tests for the `/api/categories` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use freezo_db::repositories::CategoryRepo;
use serde_json::json;

#[tokio::test]
async fn test_list_contains_seeded_default() {
    let db = common::test_db().await;

    let response = get(build_test_app(db.pool.clone()), "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let categories = json.as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Uncategorized");
    assert!(categories[0]["id"].is_number());
}

#[tokio::test]
async fn test_create_category_returns_201() {
    let db = common::test_db().await;

    let response = post_json(
        build_test_app(db.pool.clone()),
        "/api/categories",
        json!({ "name": "Fish" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Fish");
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn test_duplicate_category_returns_500_and_keeps_count() {
    let db = common::test_db().await;
    let response = post_json(
        build_test_app(db.pool.clone()),
        "/api/categories",
        json!({ "name": "Bread" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let before = CategoryRepo::count(&db.pool).await.unwrap();

    let response = post_json(
        build_test_app(db.pool.clone()),
        "/api/categories",
        json!({ "name": "Bread" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
    assert_eq!(CategoryRepo::count(&db.pool).await.unwrap(), before);
}
