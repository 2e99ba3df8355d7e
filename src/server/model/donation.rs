//! Donation domain models and money conversion.
//!
//! Amounts travel as decimal currency values in the API and are stored as integer
//! cents.

use chrono::{DateTime, Utc};

use crate::{
    model::donation::{CreateDonationDto, DonationDto},
    server::{error::AppError, model::normalize_optional},
};

/// Largest single donation accepted, in currency units.
pub const MAX_DONATION_AMOUNT: f64 = 10_000_000.0;

/// Donor name shown in place of the real name for anonymous donations.
pub const ANONYMOUS_DONOR: &str = "Anonymous";

/// Converts a decimal amount to cents, rounding to the nearest cent.
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i32,
    pub donor_id: i32,
    pub donor_name: String,
    pub amount_cents: i64,
    pub purpose: String,
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn from_entity(
        entity: entity::donation::Model,
        donor: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            donor_id: entity.donor_id,
            donor_name: donor.map(|u| u.name).unwrap_or_default(),
            amount_cents: entity.amount_cents,
            purpose: entity.purpose,
            message: entity.message,
            is_anonymous: entity.is_anonymous,
            created_at: entity.created_at,
        }
    }

    /// DTO for the donor themself. The name is never masked.
    pub fn into_dto(self) -> DonationDto {
        DonationDto {
            id: self.id,
            donor_id: Some(self.donor_id),
            donor_name: self.donor_name,
            amount: cents_to_amount(self.amount_cents),
            purpose: self.purpose,
            message: self.message,
            is_anonymous: self.is_anonymous,
            created_at: self.created_at,
        }
    }

    /// DTO for third parties. Anonymous donations hide the donor's identity.
    pub fn into_masked_dto(self) -> DonationDto {
        let is_anonymous = self.is_anonymous;
        let mut dto = self.into_dto();

        if is_anonymous {
            dto.donor_id = None;
            dto.donor_name = ANONYMOUS_DONOR.to_string();
        }

        dto
    }
}

#[derive(Debug, Clone)]
pub struct CreateDonationParams {
    pub donor_id: i32,
    pub amount_cents: i64,
    pub purpose: String,
    pub message: Option<String>,
    pub is_anonymous: bool,
}

impl CreateDonationParams {
    /// Converts and validates the request DTO.
    ///
    /// # Returns
    /// - `Ok(CreateDonationParams)` - Amount converted to cents
    /// - `Err(AppError::BadRequest)` - Amount not positive, above
    ///   `MAX_DONATION_AMOUNT` or below one cent; blank purpose
    pub fn from_dto(donor_id: i32, dto: CreateDonationDto) -> Result<Self, AppError> {
        if !dto.amount.is_finite() || dto.amount <= 0.0 || dto.amount > MAX_DONATION_AMOUNT {
            return Err(AppError::BadRequest(
                "Amount must be greater than 0 and at most 10,000,000".to_string(),
            ));
        }

        let amount_cents = amount_to_cents(dto.amount);
        if amount_cents <= 0 {
            return Err(AppError::BadRequest(
                "Amount must be at least 0.01".to_string(),
            ));
        }

        let purpose = dto.purpose.trim().to_string();
        if purpose.is_empty() {
            return Err(AppError::BadRequest("Purpose is required".to_string()));
        }

        Ok(Self {
            donor_id,
            amount_cents,
            purpose,
            message: normalize_optional(dto.message),
            is_anonymous: dto.is_anonymous,
        })
    }
}

/// A list of donations together with their summed amount.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationSummary {
    pub donations: Vec<Donation>,
    pub total_cents: i64,
}
