use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievementDto {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub achieved_on: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievementDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub achieved_on: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub achieved_on: Option<NaiveDate>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AchievementResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub achievement: AchievementDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AchievementListDto {
    pub success: bool,
    pub achievements: Vec<AchievementDto>,
}
