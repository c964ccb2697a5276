//! HTTP-level tests for newsletter subscription and subscriber
//! administration.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, delete, get, post_json};
use novus_api::error::AppError;
use novus_db::repositories::{newsletter_repo, NewsletterRepo};
use serde_json::json;
use sqlx::PgPool;

async fn subscribe(pool: &PgPool, email: &str) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/newsletter/subscribe", json!({ "email": email })).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_address_is_created_lowercased(pool: PgPool) {
    let response = subscribe(&pool, "Ada@Example.com").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["subscriber"]["email"], "ada@example.com");
    assert_eq!(json["subscriber"]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn active_duplicate_is_rejected(pool: PgPool) {
    subscribe(&pool, "ada@example.com").await;

    let response = subscribe(&pool, "ADA@example.com").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_SUBSCRIBED");
    assert_eq!(json["error"], "Email is already subscribed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_insert_is_classified_as_already_subscribed(pool: PgPool) {
    NewsletterRepo::create(&pool, "ada@example.com").await.unwrap();
    let err = NewsletterRepo::create(&pool, "ada@example.com")
        .await
        .unwrap_err();
    assert!(newsletter_repo::is_duplicate_email(&err));

    let response = AppError::Database(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "ALREADY_SUBSCRIBED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_subscribes_admit_one(pool: PgPool) {
    let mut handles = Vec::new();
    for _ in 0..5 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            subscribe(&pool, "race@example.com").await.status()
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            other => assert_eq!(other, StatusCode::BAD_REQUEST),
        }
    }
    assert_eq!(created, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_delete_removes_listed_subscribers(pool: PgPool) {
    let a = body_json(subscribe(&pool, "a@example.com").await).await;
    let b = body_json(subscribe(&pool, "b@example.com").await).await;
    subscribe(&pool, "c@example.com").await;
    let ids = [
        a["subscriber"]["id"].as_i64().unwrap(),
        b["subscriber"]["id"].as_i64().unwrap(),
        999_999,
    ];

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/admin/newsletter/bulk-delete", json!({ "ids": ids })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deletedCount"], 2);
    assert_eq!(json["message"], "2 subscriber(s) deleted successfully");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/admin/newsletter").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["subscribers"][0]["email"], "c@example.com");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/admin/newsletter/bulk-delete", json!({ "ids": [] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsubscribe_then_resubscribe_reactivates(pool: PgPool) {
    let created = body_json(subscribe(&pool, "ada@example.com").await).await;
    let id = created["subscriber"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/newsletter/unsubscribe",
        json!({ "email": "ada@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/admin/newsletter/{id}")).await).await;
    assert_eq!(json["subscriber"]["is_active"], false);
    assert!(json["subscriber"]["unsubscribed_at"].is_string());

    let response = subscribe(&pool, "ada@example.com").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["subscriber"]["id"], id);
    assert_eq!(json["subscriber"]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsubscribe_unknown_address_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/newsletter/unsubscribe",
        json!({ "email": "nobody@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_is_rejected(pool: PgPool) {
    let response = subscribe(&pool, "not-an-email").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_list_stats_and_delete(pool: PgPool) {
    let a = body_json(subscribe(&pool, "a@example.com").await).await;
    subscribe(&pool, "b@example.com").await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/newsletter/unsubscribe",
        json!({ "email": "b@example.com" }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/admin/newsletter?active=true").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["subscribers"][0]["email"], "a@example.com");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/admin/newsletter/stats").await).await;
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["stats"]["active"], 1);
    assert_eq!(json["stats"]["recent"], 2);

    let id = a["subscriber"]["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/admin/newsletter/{id}")).await.status(),
        StatusCode::OK
    );
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/api/admin/newsletter/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}
