use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, internal::InternalError, AppError},
};

async fn into_parts(err: AppError) -> (StatusCode, ErrorDto) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ErrorDto = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

/// Tests that validation errors keep their message.
///
/// Expected: 400 with the original message and `success: false`
#[tokio::test]
async fn bad_request_keeps_message() {
    let (status, body) = into_parts(AppError::BadRequest("Title is required".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.success);
    assert_eq!(body.message, "Title is required");
}

/// Tests that database failures are masked.
///
/// Verifies that the underlying database error text never reaches the client.
///
/// Expected: 500 with "Server error"
#[tokio::test]
async fn database_error_is_masked() {
    let err = AppError::DbErr(sea_orm::DbErr::Custom("table user is locked".to_string()));
    let (status, body) = into_parts(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "Server error");
}

/// Tests that internal failures are masked.
///
/// Expected: 500 with "Server error"
#[tokio::test]
async fn internal_error_is_masked() {
    let err = AppError::InternalErr(InternalError::PasswordHash("bad salt".to_string()));
    let (status, body) = into_parts(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "Server error");
}

/// Tests the auth error status mapping.
///
/// Verifies missing tokens and bad credentials map to 401 while role
/// mismatches and deactivated accounts map to 403.
///
/// Expected: 401/403 with fixed messages
#[tokio::test]
async fn auth_errors_map_to_401_and_403() {
    let (status, body) = into_parts(AuthError::MissingToken.into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "No token, authorization denied");

    let (status, body) = into_parts(AuthError::InvalidToken("expired".to_string()).into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "Token is not valid");

    let (status, body) = into_parts(AuthError::AccountDeactivated(1).into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.message, "Account is deactivated");

    let (status, body) =
        into_parts(AuthError::AccessDenied(1, "student on admin route".to_string()).into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.message, "Access denied");
}
