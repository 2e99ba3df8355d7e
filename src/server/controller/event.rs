use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{
            CreateEventDto, EventListDto, EventResponseDto, RegistrationResponseDto,
            UpdateEventDto,
        },
    },
    server::{
        controller::extract::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::event::{CreateEventParams, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "events";

#[derive(Deserialize, Default)]
pub struct EventQuery {
    pub upcoming: Option<bool>,
}

/// List active events, optionally only upcoming ones.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    params(
        ("upcoming" = Option<bool>, Query, description = "Only events that have not started yet")
    ),
    responses(
        (status = 200, description = "Active events ordered by start time", body = EventListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let events = EventService::new(&state.db)
        .list(query.upcoming.unwrap_or(false))
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventListDto {
            success: true,
            events: events.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}

/// Get one active event.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "The event", body = EventResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Event missing or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db).get_active(id).await?;

    Ok((
        StatusCode::OK,
        Json(EventResponseDto {
            success: true,
            message: None,
            event: event.into_dto(),
        }),
    ))
}

/// Create an event.
///
/// # Access Control
/// - `Admin` - Only admins can create events
///
/// # Returns
/// - `201 Created` - Event created
/// - `400 Bad Request` - Invalid schedule or capacity
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventResponseDto),
        (status = 400, description = "Invalid schedule or capacity", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(admin.id, payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponseDto {
            success: true,
            message: Some("Event created successfully".to_string()),
            event: event.into_dto(),
        }),
    ))
}

/// Update an event's details.
///
/// # Access Control
/// - `Admin` - Only admins can edit events
///
/// # Returns
/// - `200 OK` - Event updated
/// - `400 Bad Request` - Invalid schedule or capacity
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventResponseDto),
        (status = 400, description = "Invalid schedule or capacity", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .update(id, UpdateEventParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventResponseDto {
            success: true,
            message: Some("Event updated successfully".to_string()),
            event: event.into_dto(),
        }),
    ))
}

/// Deactivate an event. Existing registrations are kept.
///
/// # Access Control
/// - `Admin` - Only admins can remove events
///
/// # Returns
/// - `200 OK` - Event deactivated
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deactivated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    EventService::new(&state.db).deactivate(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Event deleted successfully"))))
}

/// Register the caller for an event that has not started and still has room.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Registered
/// - `400 Bad Request` - Event started, full, or already registered
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Event missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 201, description = "Registered", body = RegistrationResponseDto),
        (status = 400, description = "Event started, full, or already registered", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Event missing or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_for_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let registration = EventService::new(&state.db).register(&user, id).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponseDto {
            success: true,
            message: "Registered for event successfully".to_string(),
            registration: registration.into_dto(),
        }),
    ))
}

/// Cancel the caller's registration for an event.
///
/// # Access Control
/// - Any authenticated user, for their own registration
///
/// # Returns
/// - `200 OK` - Registration cancelled
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Caller is not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events/{id}/register",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Caller is not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_event_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    EventService::new(&state.db)
        .cancel_registration(&user, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Registration cancelled successfully")),
    ))
}
