//! Event factory for creating test events and registrations.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, admin.id)
///     .starts_at(Utc::now() - Duration::days(1))
///     .capacity(10)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: i32,
    title: String,
    starts_at: DateTime<Utc>,
    capacity: Option<i32>,
    is_active: bool,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Alumni Meetup {id}"`
    /// - starts_at: seven days from now
    /// - capacity: unlimited
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        Self {
            db,
            created_by,
            title: format!("Alumni Meetup {}", next_id()),
            starts_at: Utc::now() + Duration::days(7),
            capacity: None,
            is_active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            created_by: ActiveValue::Set(self.created_by),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set(Some("Main Auditorium".to_string())),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(None),
            capacity: ActiveValue::Set(self.capacity),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming, active event without capacity limit.
pub async fn create_event(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, created_by).build().await
}

/// Registers a user for an event.
pub async fn create_registration(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_registration::Model, DbErr> {
    entity::event_registration::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        registered_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
