//! Achievement domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::achievement::{AchievementDto, CreateAchievementDto, UpdateAchievementDto},
    server::{error::AppError, model::normalize_optional},
};

/// Achievement with the owning alumni's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
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

impl Achievement {
    pub fn from_entity(
        entity: entity::achievement::Model,
        owner: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            user_name: owner.map(|u| u.name).unwrap_or_default(),
            title: entity.title,
            description: entity.description,
            category: entity.category,
            achieved_on: entity.achieved_on,
            is_visible: entity.is_visible,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AchievementDto {
        AchievementDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            title: self.title,
            description: self.description,
            category: self.category,
            achieved_on: self.achieved_on,
            is_visible: self.is_visible,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAchievementParams {
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub achieved_on: Option<NaiveDate>,
}

impl CreateAchievementParams {
    pub fn from_dto(user_id: i32, dto: CreateAchievementDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            title: required_title(dto.title)?,
            description: normalize_optional(dto.description),
            category: normalize_optional(dto.category),
            achieved_on: dto.achieved_on,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAchievementParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub achieved_on: Option<NaiveDate>,
}

impl UpdateAchievementParams {
    pub fn from_dto(dto: UpdateAchievementDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.map(required_title).transpose()?,
            description: dto.description.map(|d| d.trim().to_string()),
            category: dto.category.map(|c| c.trim().to_string()),
            achieved_on: dto.achieved_on,
        })
    }
}

fn required_title(title: String) -> Result<String, AppError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    Ok(title)
}
