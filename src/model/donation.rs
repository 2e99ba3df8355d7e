use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationDto {
    /// Amount in currency units, e.g. `250.50`.
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationDto {
    pub id: i32,
    /// `None` when the donation is anonymous and the caller is not the donor.
    pub donor_id: Option<i32>,
    pub donor_name: String,
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct DonationResponseDto {
    pub success: bool,
    pub message: String,
    pub donation: DonationDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationListDto {
    pub success: bool,
    pub donations: Vec<DonationDto>,
    pub count: u64,
    pub total_amount: f64,
}
