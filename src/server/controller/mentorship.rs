use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::{MentorshipStatus, UserRole};

use crate::{
    model::{
        api::ErrorDto,
        mentorship::{
            CreateMentorshipDto, MentorshipListDto, MentorshipResponseDto,
            UpdateMentorshipStatusDto,
        },
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{mentorship::CreateMentorshipParams, parse_enum},
        service::mentorship::MentorshipService,
        state::AppState,
    },
};

pub static MENTORSHIP_TAG: &str = "mentorships";

/// Request mentorship from an alumni.
///
/// A student may hold only one pending request per mentor.
///
/// # Access Control
/// - `Student` - Only students can request mentorship
///
/// # Returns
/// - `201 Created` - Request sent
/// - `400 Bad Request` - Missing topic or a pending request already exists
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a student
/// - `404 Not Found` - Mentor is not an active alumni
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/mentorships",
    tag = MENTORSHIP_TAG,
    security(("bearer" = [])),
    request_body = CreateMentorshipDto,
    responses(
        (status = 201, description = "Request sent", body = MentorshipResponseDto),
        (status = 400, description = "Missing topic or a pending request already exists", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 404, description = "Mentor is not an active alumni", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_mentorship(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateMentorshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Student])
        .await?;

    let mentorship = MentorshipService::new(&state.db)
        .request(CreateMentorshipParams::from_dto(student.id, payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MentorshipResponseDto {
            success: true,
            message: Some("Mentorship request sent".to_string()),
            mentorship: mentorship.into_dto(),
        }),
    ))
}

/// List the caller's mentorships, as mentee for students and as mentor for alumni.
///
/// # Access Control
/// - `Student` - Requests the caller sent
/// - `Alumni` - Requests the caller received
///
/// # Returns
/// - `200 OK` - Requests addressed to or sent by the caller
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/mentorships/mine",
    tag = MENTORSHIP_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Requests addressed to or sent by the caller", body = MentorshipListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_mentorships(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Student])
        .await?;

    let mentorships = MentorshipService::new(&state.db).get_mine(&user).await?;

    Ok((
        StatusCode::OK,
        Json(MentorshipListDto {
            success: true,
            mentorships: mentorships.into_iter().map(|m| m.into_dto()).collect(),
        }),
    ))
}

/// Accept, reject or complete a mentorship request.
///
/// # Access Control
/// - `Alumni` - Only the requested mentor
///
/// # Returns
/// - `200 OK` - Status updated
/// - `400 Bad Request` - Unknown status or transition not allowed
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not the addressed mentor
/// - `404 Not Found` - Mentorship not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/mentorships/{id}/status",
    tag = MENTORSHIP_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Mentorship ID")
    ),
    request_body = UpdateMentorshipStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MentorshipResponseDto),
        (status = 400, description = "Unknown status or transition not allowed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the addressed mentor", body = ErrorDto),
        (status = 404, description = "Mentorship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mentorship_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateMentorshipStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let status: MentorshipStatus = parse_enum(&payload.status, "status")?;
    let mentorship = MentorshipService::new(&state.db)
        .update_status(&user, id, status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MentorshipResponseDto {
            success: true,
            message: Some("Mentorship status updated".to_string()),
            mentorship: mentorship.into_dto(),
        }),
    ))
}
