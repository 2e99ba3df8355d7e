use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        alumni::{AlumniListDto, AlumniProfileResponseDto, UpsertAlumniProfileDto},
        api::ErrorDto,
    },
    server::{
        controller::extract::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            alumni::{AlumniFilter, UpsertAlumniProfileParams},
            normalize_optional,
            page::PageRequest,
        },
        service::alumni::AlumniService,
        state::AppState,
    },
};

pub static ALUMNI_TAG: &str = "alumni";

/// Query parameters for the alumni directory.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlumniQuery {
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub company: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Get the caller's alumni profile.
///
/// # Access Control
/// - `Alumni` - Only alumni have a profile of this kind
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni
/// - `404 Not Found` - No profile created yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/alumni/me",
    tag = ALUMNI_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's profile", body = AlumniProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni", body = ErrorDto),
        (status = 404, description = "No profile created yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let profile = AlumniService::new(&state.db).get_own(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(AlumniProfileResponseDto {
            success: true,
            message: None,
            profile: profile.into_dto(),
        }),
    ))
}

/// Create or replace the caller's alumni profile.
///
/// Omitted fields are cleared, except visibility which keeps its stored value.
///
/// # Access Control
/// - `Alumni` - Only alumni can maintain a profile
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `201 Created` - Profile created
/// - `400 Bad Request` - Invalid profile data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/alumni/me",
    tag = ALUMNI_TAG,
    security(("bearer" = [])),
    request_body = UpsertAlumniProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = AlumniProfileResponseDto),
        (status = 201, description = "Profile created", body = AlumniProfileResponseDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<UpsertAlumniProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let params = UpsertAlumniProfileParams::from_dto(user.id, payload)?;
    let (profile, created) = AlumniService::new(&state.db).upsert(params).await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Profile created successfully")
    } else {
        (StatusCode::OK, "Profile updated successfully")
    };

    Ok((
        status,
        Json(AlumniProfileResponseDto {
            success: true,
            message: Some(message.to_string()),
            profile: profile.into_dto(),
        }),
    ))
}

/// List the alumni directory, filtered by department, company, graduation year or a free text search over name, company and job title.
#[utoipa::path(
    get,
    path = "/api/alumni",
    tag = ALUMNI_TAG,
    security(("bearer" = [])),
    params(
        ("department" = Option<String>, Query, description = "Department substring"),
        ("graduationYear" = Option<i32>, Query, description = "Exact graduation year"),
        ("company" = Option<String>, Query, description = "Current company substring"),
        ("search" = Option<String>, Query, description = "Matches name, company or job title"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Directory page", body = AlumniListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_alumni(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<AlumniQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let filter = AlumniFilter {
        department: normalize_optional(query.department),
        graduation_year: query.graduation_year,
        company: normalize_optional(query.company),
        search: normalize_optional(query.search),
    };

    let page = AlumniService::new(&state.db)
        .directory(filter, PageRequest::new(query.page, query.limit))
        .await?;
    let pagination = page.pagination_dto();

    Ok((
        StatusCode::OK,
        Json(AlumniListDto {
            success: true,
            profiles: page.items.into_iter().map(|p| p.into_dto()).collect(),
            pagination,
        }),
    ))
}

/// Get one alumni's public profile.
#[utoipa::path(
    get,
    path = "/api/alumni/{user_id}",
    tag = ALUMNI_TAG,
    security(("bearer" = [])),
    params(
        ("user_id" = i32, Path, description = "User ID of the alumni")
    ),
    responses(
        (status = 200, description = "The profile", body = AlumniProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Profile missing or hidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alumni(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let profile = AlumniService::new(&state.db).get_visible(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(AlumniProfileResponseDto {
            success: true,
            message: None,
            profile: profile.into_dto(),
        }),
    ))
}
