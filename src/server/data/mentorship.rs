//! Mentorship request repository.
//!
//! The mentorship table references the user table twice, so participant names are
//! loaded with a separate batched lookup instead of a join.

use chrono::Utc;
use entity::sea_orm_active_enums::MentorshipStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user_names,
    model::mentorship::{CreateMentorshipParams, Mentorship},
};

pub struct MentorshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a request in the `pending` state.
    pub async fn create(&self, params: CreateMentorshipParams) -> Result<Mentorship, DbErr> {
        let now = Utc::now();
        let mentorship = entity::mentorship::ActiveModel {
            mentor_id: ActiveValue::Set(params.mentor_id),
            mentee_id: ActiveValue::Set(params.mentee_id),
            topic: ActiveValue::Set(params.topic),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(MentorshipStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let id = mentorship.id;
        self.with_names(vec![mentorship])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Mentorship with id {} not found after creation",
                id
            )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Mentorship>, DbErr> {
        let Some(mentorship) = entity::prelude::Mentorship::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_names(vec![mentorship]).await?.pop())
    }

    /// Checks for an open (`pending`) request between a mentee and a mentor.
    pub async fn pending_exists(&self, mentor_id: i32, mentee_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Mentorship::find()
            .filter(entity::mentorship::Column::MentorId.eq(mentor_id))
            .filter(entity::mentorship::Column::MenteeId.eq(mentee_id))
            .filter(entity::mentorship::Column::Status.eq(MentorshipStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets requests addressed to a mentor, newest first.
    pub async fn get_for_mentor(&self, mentor_id: i32) -> Result<Vec<Mentorship>, DbErr> {
        let rows = entity::prelude::Mentorship::find()
            .filter(entity::mentorship::Column::MentorId.eq(mentor_id))
            .order_by_desc(entity::mentorship::Column::CreatedAt)
            .order_by_desc(entity::mentorship::Column::Id)
            .all(self.db)
            .await?;

        self.with_names(rows).await
    }

    /// Gets requests sent by a mentee, newest first.
    pub async fn get_for_mentee(&self, mentee_id: i32) -> Result<Vec<Mentorship>, DbErr> {
        let rows = entity::prelude::Mentorship::find()
            .filter(entity::mentorship::Column::MenteeId.eq(mentee_id))
            .order_by_desc(entity::mentorship::Column::CreatedAt)
            .order_by_desc(entity::mentorship::Column::Id)
            .all(self.db)
            .await?;

        self.with_names(rows).await
    }

    /// Stores a new status. Transition rules are enforced by the service.
    pub async fn update_status(
        &self,
        id: i32,
        status: MentorshipStatus,
    ) -> Result<Option<Mentorship>, DbErr> {
        let Some(mentorship) = entity::prelude::Mentorship::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::mentorship::ActiveModel = mentorship.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        let updated = active.update(self.db).await?;

        Ok(self.with_names(vec![updated]).await?.pop())
    }

    pub async fn count_by_status(&self, status: MentorshipStatus) -> Result<u64, DbErr> {
        entity::prelude::Mentorship::find()
            .filter(entity::mentorship::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    async fn with_names(
        &self,
        rows: Vec<entity::mentorship::Model>,
    ) -> Result<Vec<Mentorship>, DbErr> {
        let mut ids: Vec<i32> = rows
            .iter()
            .flat_map(|m| [m.mentor_id, m.mentee_id])
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let names = user_names(self.db, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|m| {
                let mentor_name = names.get(&m.mentor_id).cloned().unwrap_or_default();
                let mentee_name = names.get(&m.mentee_id).cloned().unwrap_or_default();
                Mentorship::from_entity(m, mentor_name, mentee_name)
            })
            .collect())
    }
}
