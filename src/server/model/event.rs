//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto, RegistrationDto, UpdateEventDto},
    server::{error::AppError, model::normalize_optional},
};

/// Event with its current number of registrations.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub created_by: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
    pub registration_count: u64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model, registration_count: u64) -> Self {
        Self {
            id: entity.id,
            created_by: entity.created_by,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            capacity: entity.capacity,
            registration_count,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.registration_count >= capacity.max(0) as u64)
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            created_by: self.created_by,
            title: self.title,
            description: self.description,
            location: self.location,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            capacity: self.capacity,
            registration_count: self.registration_count,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub created_by: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
}

impl CreateEventParams {
    pub fn from_dto(created_by: i32, dto: CreateEventDto) -> Result<Self, AppError> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        validate_schedule(dto.starts_at, dto.ends_at)?;
        validate_capacity(dto.capacity)?;

        Ok(Self {
            created_by,
            title,
            description: normalize_optional(dto.description),
            location: normalize_optional(dto.location),
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            capacity: dto.capacity,
        })
    }
}

/// Partial update of an event. `None` leaves the stored value untouched.
///
/// Schedule consistency against stored values is checked by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventDto) -> Result<Self, AppError> {
        let title = match dto.title {
            Some(title) if title.trim().is_empty() => {
                return Err(AppError::BadRequest("Title is required".to_string()))
            }
            title => title.map(|t| t.trim().to_string()),
        };

        validate_capacity(dto.capacity)?;

        Ok(Self {
            title,
            description: dto.description.map(|d| d.trim().to_string()),
            location: dto.location.map(|l| l.trim().to_string()),
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            capacity: dto.capacity,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn from_entity(entity: entity::event_registration::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            registered_at: entity.registered_at,
        }
    }

    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            id: self.id,
            event_id: self.event_id,
            user_id: self.user_id,
            registered_at: self.registered_at,
        }
    }
}

pub fn validate_schedule(
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if ends_at.is_some_and(|end| end < starts_at) {
        return Err(AppError::BadRequest(
            "Event end time cannot be before its start time".to_string(),
        ));
    }
    Ok(())
}

fn validate_capacity(capacity: Option<i32>) -> Result<(), AppError> {
    if capacity.is_some_and(|c| c <= 0) {
        return Err(AppError::BadRequest(
            "Capacity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
