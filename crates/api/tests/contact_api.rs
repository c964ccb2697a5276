//! HTTP-level tests for the contact form and contact administration.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn submit(pool: &PgPool, subject: Option<&str>) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "subject": subject,
            "message": "Can we talk about compilers?",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["contact"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_is_stored_as_new(pool: PgPool) {
    let id = submit(&pool, Some("Hello")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/admin/contacts/{id}")).await).await;
    assert_eq!(json["contact"]["status"], "new");
    assert_eq!(json["contact"]["subject"], "Hello");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_requires_name_email_and_message(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/contact",
        json!({ "name": "Grace", "email": "grace@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Name, email, and message are required"
    );

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/contact",
        json!({ "name": "Grace", "email": "grace", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_can_be_changed_and_counted(pool: PgPool) {
    let first = submit(&pool, None).await;
    submit(&pool, None).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/admin/contacts/{first}"),
        json!({ "status": "responded" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/admin/contacts/{first}"),
        json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/admin/contacts/stats").await).await;
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["stats"]["new"], 1);
    assert_eq!(json["stats"]["responded"], 1);
    assert_eq!(json["stats"]["responseRate"], 50.0);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/admin/contacts?status=new").await).await;
    assert_eq!(json["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_contact(pool: PgPool) {
    let id = submit(&pool, None).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/admin/contacts/{id}")).await.status(),
        StatusCode::OK
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, &format!("/api/admin/contacts/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_rate_is_zero_without_messages(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/admin/contacts/stats").await).await;
    assert_eq!(json["stats"]["total"], 0);
    assert_eq!(json["stats"]["responseRate"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_delete_removes_listed_contacts(pool: PgPool) {
    let first = submit(&pool, None).await;
    let second = submit(&pool, None).await;
    let kept = submit(&pool, None).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/contacts/bulk-delete",
        json!({ "ids": [first, second, 999_999] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deletedCount"], 2);
    assert_eq!(json["message"], "2 contact(s) deleted successfully");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/admin/contacts").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["contacts"][0]["id"], kept);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/admin/contacts/bulk-delete", json!({ "ids": [] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No contact IDs provided");
}
