use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        admin::{AdminProfileResponseDto, StatsResponseDto, UpdateAdminProfileDto},
        api::ErrorDto,
        user::{UpdateUserStatusDto, UserListDto, UserStatusResponseDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            admin::UpsertAdminProfileParams, normalize_optional, page::PageRequest, parse_enum,
            user::UserFilter,
        },
        service::admin::AdminService,
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Query parameters for the admin user list.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Get the caller's admin profile.
///
/// # Access Control
/// - `Admin` - Only admins
///
/// # Returns
/// - `200 OK` - The caller's admin profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No profile saved yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/me",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's admin profile", body = AdminProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No profile saved yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let profile = AdminService::new(&state.db).get_profile(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(AdminProfileResponseDto {
            success: true,
            message: None,
            profile: profile.into_dto(),
        }),
    ))
}

/// Create or update the caller's admin profile.
///
/// # Access Control
/// - `Admin` - Only admins
///
/// # Returns
/// - `200 OK` - Profile saved
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/me",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = UpdateAdminProfileDto,
    responses(
        (status = 200, description = "Profile saved", body = AdminProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<UpdateAdminProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let profile = AdminService::new(&state.db)
        .upsert_profile(UpsertAdminProfileParams::from_dto(user.id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(AdminProfileResponseDto {
            success: true,
            message: Some("Profile updated successfully".to_string()),
            profile: profile.into_dto(),
        }),
    ))
}

/// List all user accounts, optionally filtered by role or active state.
///
/// # Access Control
/// - `Admin` - Only admins can browse accounts
///
/// # Returns
/// - `200 OK` - Page of users
/// - `400 Bad Request` - Unknown role
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(
        ("role" = Option<String>, Query, description = "admin, alumni or student"),
        ("isActive" = Option<bool>, Query, description = "Filter by activation flag"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of users", body = UserListDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let filter = UserFilter {
        role: normalize_optional(query.role)
            .map(|role| parse_enum(&role, "role"))
            .transpose()?,
        is_active: query.is_active,
    };

    let page = AdminService::new(&state.db)
        .list_users(filter, PageRequest::new(query.page, query.limit))
        .await?;
    let pagination = page.pagination_dto();

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            success: true,
            users: page.items.into_iter().map(|u| u.into_dto()).collect(),
            pagination,
        }),
    ))
}

/// Activate or deactivate a user account.
///
/// Admins cannot deactivate their own account.
///
/// # Access Control
/// - `Admin` - Only admins can change account status
///
/// # Returns
/// - `200 OK` - Status changed
/// - `400 Bad Request` - Admin tried to deactivate themselves
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Status changed", body = UserStatusResponseDto),
        (status = 400, description = "Admin tried to deactivate themselves", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let user = AdminService::new(&state.db)
        .set_user_status(&admin, id, payload.is_active)
        .await?;

    let message = if user.is_active {
        "User activated successfully"
    } else {
        "User deactivated successfully"
    };

    Ok((
        StatusCode::OK,
        Json(UserStatusResponseDto {
            success: true,
            message: message.to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Get dashboard counts for users, jobs, events, mentorships and donations.
///
/// # Access Control
/// - `Admin` - Only admins
///
/// # Returns
/// - `200 OK` - Dashboard counters
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = StatsResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok((
        StatusCode::OK,
        Json(StatsResponseDto {
            success: true,
            stats: stats.into_dto(),
        }),
    ))
}
