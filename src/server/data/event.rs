//! Event repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::count_by_foreign_key,
    model::event::{CreateEventParams, Event, UpdateEventParams},
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            created_by: ActiveValue::Set(params.created_by),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            capacity: ActiveValue::Set(params.capacity),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(event, 0))
    }

    /// Gets an event by ID, including inactive ones.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_counts(vec![event]).await?.pop())
    }

    /// Gets active events ordered by start time.
    ///
    /// # Arguments
    /// - `starting_after` - When set, only events starting at or after this instant
    pub async fn get_active(
        &self,
        starting_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<Event>, DbErr> {
        let mut query =
            entity::prelude::Event::find().filter(entity::event::Column::IsActive.eq(true));

        if let Some(after) = starting_after {
            query = query.filter(entity::event::Column::StartsAt.gte(after));
        }

        let rows = query
            .order_by_asc(entity::event::Column::StartsAt)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.with_counts(rows).await
    }

    /// Applies a partial update. Empty description or location clears the field.
    pub async fn update(&self, id: i32, params: UpdateEventParams) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = event.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description).filter(|d| !d.is_empty()));
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(Some(location).filter(|l| !l.is_empty()));
        }
        if let Some(starts_at) = params.starts_at {
            active.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(ends_at) = params.ends_at {
            active.ends_at = ActiveValue::Set(Some(ends_at));
        }
        if let Some(capacity) = params.capacity {
            active.capacity = ActiveValue::Set(Some(capacity));
        }
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Soft-deletes an event by clearing `is_active`.
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::event::ActiveModel = event.into();
        active.is_active = ActiveValue::Set(false);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Counts active events that have not started yet.
    pub async fn count_upcoming(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::IsActive.eq(true))
            .filter(entity::event::Column::StartsAt.gt(now))
            .count(self.db)
            .await
    }

    async fn with_counts(&self, rows: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        let ids: Vec<i32> = rows.iter().map(|e| e.id).collect();
        let counts = count_by_foreign_key::<entity::prelude::EventRegistration, _>(
            self.db,
            entity::event_registration::Column::EventId,
            &ids,
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|event| {
                let count = counts.get(&event.id).copied().unwrap_or(0);
                Event::from_entity(event, count)
            })
            .collect())
    }
}
