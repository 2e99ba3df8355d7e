use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlumniProfileDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub graduation_year: i32,
    pub degree: Option<String>,
    pub department: Option<String>,
    pub current_company: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
    pub bio: Option<String>,
    pub is_visible: bool,
    pub updated_at: DateTime<Utc>,
}

/// Create-or-update payload for the caller's own alumni profile.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAlumniProfileDto {
    pub graduation_year: i32,
    pub degree: Option<String>,
    pub department: Option<String>,
    pub current_company: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
    pub bio: Option<String>,
    pub is_visible: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AlumniProfileResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub profile: AlumniProfileDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AlumniListDto {
    pub success: bool,
    pub profiles: Vec<AlumniProfileDto>,
    pub pagination: PaginationDto,
}
