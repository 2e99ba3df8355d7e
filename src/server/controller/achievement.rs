use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        achievement::{
            AchievementListDto, AchievementResponseDto, CreateAchievementDto, UpdateAchievementDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            achievement::{CreateAchievementParams, UpdateAchievementParams},
            normalize_optional,
        },
        service::achievement::AchievementService,
        state::AppState,
    },
};

pub static ACHIEVEMENT_TAG: &str = "achievements";

#[derive(Deserialize, Default)]
pub struct AchievementQuery {
    pub category: Option<String>,
}

/// Post a new achievement.
///
/// # Access Control
/// - `Alumni` - Only alumni can post achievements
///
/// # Returns
/// - `201 Created` - Achievement created
/// - `400 Bad Request` - Missing title
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    security(("bearer" = [])),
    request_body = CreateAchievementDto,
    responses(
        (status = 201, description = "Achievement created", body = AchievementResponseDto),
        (status = 400, description = "Missing title", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_achievement(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateAchievementDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let achievement = AchievementService::new(&state.db)
        .create(CreateAchievementParams::from_dto(user.id, payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AchievementResponseDto {
            success: true,
            message: Some("Achievement added successfully".to_string()),
            achievement: achievement.into_dto(),
        }),
    ))
}

/// List visible achievements of active users, optionally in one category.
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("category" = Option<String>, Query, description = "Exact category to filter by")
    ),
    responses(
        (status = 200, description = "Visible achievements of active users, newest first", body = AchievementListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<AchievementQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let achievements = AchievementService::new(&state.db)
        .list_visible(normalize_optional(query.category))
        .await?;

    Ok((
        StatusCode::OK,
        Json(AchievementListDto {
            success: true,
            achievements: achievements.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// List the caller's visible achievements.
///
/// # Access Control
/// - `Alumni` - Only alumni
///
/// # Returns
/// - `200 OK` - The caller's visible achievements
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/achievements/mine",
    tag = ACHIEVEMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's visible achievements", body = AchievementListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let achievements = AchievementService::new(&state.db).get_mine(&user).await?;

    Ok((
        StatusCode::OK,
        Json(AchievementListDto {
            success: true,
            achievements: achievements.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// Update one of the caller's achievements.
///
/// # Access Control
/// - Any authenticated user, for achievements they own
///
/// # Returns
/// - `200 OK` - Achievement updated
/// - `400 Bad Request` - Blank title
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the achievement
/// - `404 Not Found` - Achievement missing or hidden
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/achievements/{id}",
    tag = ACHIEVEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Achievement ID")
    ),
    request_body = UpdateAchievementDto,
    responses(
        (status = 200, description = "Achievement updated", body = AchievementResponseDto),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the achievement", body = ErrorDto),
        (status = 404, description = "Achievement missing or hidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_achievement(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateAchievementDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let achievement = AchievementService::new(&state.db)
        .update(&user, id, UpdateAchievementParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AchievementResponseDto {
            success: true,
            message: Some("Achievement updated successfully".to_string()),
            achievement: achievement.into_dto(),
        }),
    ))
}

/// Hide an achievement. The row is kept.
///
/// # Access Control
/// - Owner - Their own achievement
/// - `Admin` - Any achievement
///
/// # Returns
/// - `200 OK` - Achievement hidden
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - Achievement missing or already hidden
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/achievements/{id}",
    tag = ACHIEVEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Achievement ID")
    ),
    responses(
        (status = 200, description = "Achievement hidden", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the owner nor an admin", body = ErrorDto),
        (status = 404, description = "Achievement missing or already hidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_achievement(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    AchievementService::new(&state.db).hide(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Achievement deleted successfully")),
    ))
}
