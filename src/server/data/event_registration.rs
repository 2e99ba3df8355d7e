//! Event registration repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::event::Registration;

pub struct EventRegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRegistrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, event_id: i32, user_id: i32) -> Result<Registration, DbErr> {
        let registration = entity::event_registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            registered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Registration::from_entity(registration))
    }

    pub async fn exists(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes a user's registration.
    ///
    /// # Returns
    /// - `Ok(true)` - Registration removed
    /// - `Ok(false)` - The user was not registered
    pub async fn delete(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let Some(registration) = entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        registration.delete(self.db).await?;

        Ok(true)
    }
}
