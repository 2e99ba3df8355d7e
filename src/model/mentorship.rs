use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorshipDto {
    pub mentor_id: i32,
    pub topic: String,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipDto {
    pub id: i32,
    pub mentor_id: i32,
    pub mentor_name: String,
    pub mentee_id: i32,
    pub mentee_name: String,
    pub topic: String,
    pub message: Option<String>,
    /// One of `pending`, `accepted`, `rejected`, `completed`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MentorshipResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub mentorship: MentorshipDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MentorshipListDto {
    pub success: bool,
    pub mentorships: Vec<MentorshipDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateMentorshipStatusDto {
    pub status: String,
}
