//! `AppError` to HTTP response mapping.
//!
//! These tests call `IntoResponse` directly and need no server or database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use novus_api::error::AppError;
use novus_core::error::CoreError;
use novus_db::store::StoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Booking",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Booking with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Date is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Date is required");
}

#[tokio::test]
async fn slot_conflict_is_a_client_error() {
    let (status, json) = error_to_response(StoreError::SlotTaken.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "SLOT_CONFLICT");
    assert_eq!(json["error"], "This time slot is already booked");
}

#[tokio::test]
async fn already_subscribed_is_a_client_error() {
    let (status, json) = error_to_response(AppError::AlreadySubscribed).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ALREADY_SUBSCRIBED");
    assert_eq!(json["error"], "Email is already subscribed");
}

#[tokio::test]
async fn lookup_by_key_not_found_returns_404() {
    let err = AppError::NotFound("Email not found in subscribers list".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Email not found in subscribers list");
}

#[tokio::test]
async fn configuration_error_is_hidden_from_clients() {
    let err = AppError::Core(CoreError::InvalidConfiguration(
        "meeting_duration must be positive, got 0".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}
