use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, event_registration::EventRegistrationRepository},
    error::AppError,
    model::{
        event::{validate_schedule, CreateEventParams, Event, Registration, UpdateEventParams},
        user::User,
    },
};

/// Service providing business logic for events and registrations.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active events by start time.
    ///
    /// # Arguments
    /// - `upcoming` - Hide events that have already started
    pub async fn list(&self, upcoming: bool) -> Result<Vec<Event>, AppError> {
        let starting_after = upcoming.then(Utc::now);

        Ok(EventRepository::new(self.db)
            .get_active(starting_after)
            .await?)
    }

    /// Gets an active event.
    ///
    /// # Returns
    /// - `Ok(Event)` - The event with its registration count
    /// - `Err(AppError::NotFound)` - Missing or deactivated event
    pub async fn get_active(&self, id: i32) -> Result<Event, AppError> {
        match EventRepository::new(self.db).get_by_id(id).await? {
            Some(event) if event.is_active => Ok(event),
            _ => Err(not_found()),
        }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db).create(params).await?;

        tracing::info!("Admin {} created event {}", event.created_by, event.id);

        Ok(event)
    }

    /// Applies a partial update.
    ///
    /// The schedule is validated against the merged result, so moving only the start
    /// past the stored end is rejected.
    pub async fn update(&self, id: i32, params: UpdateEventParams) -> Result<Event, AppError> {
        let event = self.get_active(id).await?;

        validate_schedule(
            params.starts_at.unwrap_or(event.starts_at),
            params.ends_at.or(event.ends_at),
        )?;

        EventRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn deactivate(&self, id: i32) -> Result<(), AppError> {
        self.get_active(id).await?;
        EventRepository::new(self.db).deactivate(id).await?;

        tracing::info!("Deactivated event {}", id);

        Ok(())
    }

    /// Registers the caller for an event.
    ///
    /// # Returns
    /// - `Ok(Registration)` - The new registration
    /// - `Err(AppError::NotFound)` - Missing or deactivated event
    /// - `Err(AppError::BadRequest)` - Event already started, caller already registered,
    ///   or the event is at capacity
    pub async fn register(&self, user: &User, event_id: i32) -> Result<Registration, AppError> {
        let event = self.get_active(event_id).await?;

        if event.has_started(Utc::now()) {
            return Err(AppError::BadRequest(
                "Cannot register for a past event".to_string(),
            ));
        }

        let registrations = EventRegistrationRepository::new(self.db);
        if registrations.exists(event_id, user.id).await? {
            return Err(AppError::BadRequest(
                "Already registered for this event".to_string(),
            ));
        }

        if event.is_full() {
            return Err(AppError::BadRequest("Event is full".to_string()));
        }

        let registration = registrations.create(event_id, user.id).await?;

        tracing::info!("User {} registered for event {}", user.id, event_id);

        Ok(registration)
    }

    /// Cancels the caller's registration.
    ///
    /// # Returns
    /// - `Ok(())` - Registration removed
    /// - `Err(AppError::NotFound)` - Caller was not registered
    pub async fn cancel_registration(&self, user: &User, event_id: i32) -> Result<(), AppError> {
        let removed = EventRegistrationRepository::new(self.db)
            .delete(event_id, user.id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Registration not found".to_string()));
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}
