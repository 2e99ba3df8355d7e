use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateAdminProfileDto {
    pub department: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminProfileResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub profile: AdminProfileDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCountsDto {
    pub total: u64,
    pub active: u64,
    pub admins: u64,
    pub alumni: u64,
    pub students: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationTotalsDto {
    pub count: u64,
    pub total_amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MentorshipCountsDto {
    pub pending: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub completed: u64,
}

/// Dashboard counters shown to administrators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub users: UserCountsDto,
    pub active_jobs: u64,
    pub total_applications: u64,
    pub donations: DonationTotalsDto,
    pub mentorships: MentorshipCountsDto,
    pub upcoming_events: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct StatsResponseDto {
    pub success: bool,
    pub stats: DashboardStatsDto,
}
