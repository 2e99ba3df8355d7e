//! Mentorship request models and the status workflow.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MentorshipStatus;
use sea_orm::ActiveEnum;

use crate::{
    model::mentorship::{CreateMentorshipDto, MentorshipDto},
    server::{error::AppError, model::normalize_optional},
};

/// Mentorship request with the names of both participants.
#[derive(Debug, Clone, PartialEq)]
pub struct Mentorship {
    pub id: i32,
    pub mentor_id: i32,
    pub mentor_name: String,
    pub mentee_id: i32,
    pub mentee_name: String,
    pub topic: String,
    pub message: Option<String>,
    pub status: MentorshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mentorship {
    pub fn from_entity(
        entity: entity::mentorship::Model,
        mentor_name: String,
        mentee_name: String,
    ) -> Self {
        Self {
            id: entity.id,
            mentor_id: entity.mentor_id,
            mentor_name,
            mentee_id: entity.mentee_id,
            mentee_name,
            topic: entity.topic,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MentorshipDto {
        MentorshipDto {
            id: self.id,
            mentor_id: self.mentor_id,
            mentor_name: self.mentor_name,
            mentee_id: self.mentee_id,
            mentee_name: self.mentee_name,
            topic: self.topic,
            message: self.message,
            status: self.status.to_value(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMentorshipParams {
    pub mentor_id: i32,
    pub mentee_id: i32,
    pub topic: String,
    pub message: Option<String>,
}

impl CreateMentorshipParams {
    pub fn from_dto(mentee_id: i32, dto: CreateMentorshipDto) -> Result<Self, AppError> {
        let topic = dto.topic.trim().to_string();
        if topic.is_empty() {
            return Err(AppError::BadRequest("Topic is required".to_string()));
        }

        Ok(Self {
            mentor_id: dto.mentor_id,
            mentee_id,
            topic,
            message: normalize_optional(dto.message),
        })
    }
}

/// Returns whether a request may move from `from` to `to`.
///
/// Allowed: `pending → accepted`, `pending → rejected`, `accepted → completed`.
/// Rejected and completed requests are final.
pub fn can_transition(from: MentorshipStatus, to: MentorshipStatus) -> bool {
    matches!(
        (from, to),
        (MentorshipStatus::Pending, MentorshipStatus::Accepted)
            | (MentorshipStatus::Pending, MentorshipStatus::Rejected)
            | (MentorshipStatus::Accepted, MentorshipStatus::Completed)
    )
}
