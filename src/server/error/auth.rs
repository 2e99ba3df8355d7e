use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry or format validation.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),

    /// Token subject references a user that no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotFound(i32),

    /// User exists but has been deactivated by an administrator.
    #[error("User {0} is deactivated")]
    AccountDeactivated(i32),

    /// User's role is not in the route's allow-list.
    ///
    /// # Fields
    /// - ID of the user denied access
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an unknown email or a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Password change attempted with a wrong current password.
    #[error("User {0} supplied an incorrect current password")]
    IncorrectPassword(i32),

    /// Public registration attempted with the admin role.
    #[error("Registration with a privileged role was rejected")]
    RoleNotAllowed,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes and client-facing messages:
/// - `MissingToken` → 401 "No token, authorization denied"
/// - `InvalidToken` → 401 "Token is not valid"
/// - `UserNotFound` → 401 "User not found"
/// - `InvalidCredentials` → 401 "Invalid credentials"
/// - `IncorrectPassword` → 401 "Current password is incorrect"
/// - `AccountDeactivated` → 403 "Account is deactivated"
/// - `AccessDenied` → 403 "Access denied"
/// - `RoleNotAllowed` → 403 "Admin accounts cannot be registered"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "No token, authorization denied"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Token is not valid"),
            Self::UserNotFound(_) => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::IncorrectPassword(_) => {
                (StatusCode::UNAUTHORIZED, "Current password is incorrect")
            }
            Self::AccountDeactivated(_) => (StatusCode::FORBIDDEN, "Account is deactivated"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::RoleNotAllowed => (StatusCode::FORBIDDEN, "Admin accounts cannot be registered"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
