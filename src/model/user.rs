use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

/// Public representation of an account. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// One of `admin`, `alumni`, `student`.
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserResponseDto {
    pub success: bool,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserListDto {
    pub success: bool,
    pub users: Vec<UserDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusDto {
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserStatusResponseDto {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
}
