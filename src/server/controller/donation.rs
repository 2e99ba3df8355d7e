use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::{
        api::ErrorDto,
        donation::{CreateDonationDto, DonationListDto, DonationResponseDto},
    },
    server::{
        controller::extract::ApiJson,
        error::AppError,
        middleware::auth::AuthGuard,
        model::donation::{cents_to_amount, CreateDonationParams},
        service::donation::DonationService,
        state::AppState,
    },
};

pub static DONATION_TAG: &str = "donations";

/// Record a donation from the caller.
///
/// # Access Control
/// - `Alumni` - Only alumni can donate
///
/// # Returns
/// - `201 Created` - Donation recorded
/// - `400 Bad Request` - Non-positive amount or missing purpose
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/donations/donate",
    tag = DONATION_TAG,
    security(("bearer" = [])),
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Donation recorded", body = DonationResponseDto),
        (status = 400, description = "Non-positive amount or missing purpose", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn donate(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateDonationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let donation = DonationService::new(&state.db)
        .donate(CreateDonationParams::from_dto(user.id, payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DonationResponseDto {
            success: true,
            message: "Thank you for your donation".to_string(),
            donation: donation.into_dto(),
        }),
    ))
}

/// List the caller's donations with their running total.
///
/// # Access Control
/// - `Alumni` - Only alumni
///
/// # Returns
/// - `200 OK` - The caller's donations and their total
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/donations/mine",
    tag = DONATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's donations and their total", body = DonationListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_donations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni])
        .await?;

    let summary = DonationService::new(&state.db).get_mine(&user).await?;

    Ok((
        StatusCode::OK,
        Json(DonationListDto {
            success: true,
            count: summary.donations.len() as u64,
            total_amount: cents_to_amount(summary.total_cents),
            donations: summary.donations.into_iter().map(|d| d.into_dto()).collect(),
        }),
    ))
}

/// List every donation with the overall total.
///
/// Anonymous donations keep their amount but hide the donor.
///
/// # Access Control
/// - `Admin` - Only admins can see all donations
///
/// # Returns
/// - `200 OK` - All donations, anonymous donors masked
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/donations",
    tag = DONATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All donations, anonymous donors masked", body = DonationListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_donations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Admin])
        .await?;

    let summary = DonationService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(DonationListDto {
            success: true,
            count: summary.donations.len() as u64,
            total_amount: cents_to_amount(summary.total_cents),
            donations: summary
                .donations
                .into_iter()
                .map(|d| d.into_masked_dto())
                .collect(),
        }),
    ))
}
