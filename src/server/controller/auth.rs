use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthResponseDto, ChangePasswordDto, LoginDto, RegisterDto},
        user::UserResponseDto,
    },
    server::{
        controller::extract::ApiJson,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new student or alumni account and return a signed token.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid input or email already registered", body = ErrorDto),
        (status = 403, description = "Admin role requested", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let (token, user) = AuthService::new(&state.db, &state.jwt)
        .register(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            success: true,
            message: Some("User registered successfully".to_string()),
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password and return a signed token.
///
/// Deactivated accounts are refused even with the correct password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account is deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.jwt)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            success: true,
            message: None,
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the authenticated caller's account.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = UserResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Account is deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Change the caller's password after verifying the current one.
///
/// # Access Control
/// - Any authenticated user, for their own account only
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Missing token or wrong current password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Missing token or wrong current password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.jwt)
        .change_password(&user, &payload.current_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Password updated successfully")),
    ))
}
