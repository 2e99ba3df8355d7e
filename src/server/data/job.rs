//! Job posting repository.
//!
//! Postings are returned as `Job` domain models enriched with the poster's name and the
//! number of applications received.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{contains_literal, count_by_foreign_key},
    model::{
        job::{CreateJobParams, Job, JobFilter, UpdateJobParams},
        page::PageRequest,
    },
};

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active job posting.
    ///
    /// # Arguments
    /// - `params` - Validated posting content and the posting user's ID
    ///
    /// # Returns
    /// - `Ok(Job)` - The created posting with poster name and zero applications
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, params: CreateJobParams) -> Result<Job, DbErr> {
        let now = Utc::now();
        let job = entity::job::ActiveModel {
            posted_by: ActiveValue::Set(params.posted_by),
            title: ActiveValue::Set(params.title),
            company: ActiveValue::Set(params.company),
            location: ActiveValue::Set(params.location),
            job_type: ActiveValue::Set(params.job_type),
            description: ActiveValue::Set(params.description),
            requirements: ActiveValue::Set(params.requirements),
            salary: ActiveValue::Set(params.salary),
            application_deadline: ActiveValue::Set(params.application_deadline),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(job.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Job with id {} not found after creation",
                job.id
            )))
    }

    /// Gets a posting by ID, including inactive ones.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Job>, DbErr> {
        let result = entity::prelude::Job::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match result {
            Some(row) => Ok(self.with_counts(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Gets a page of active postings, newest first.
    ///
    /// # Arguments
    /// - `filter` - Exact job type plus substring matches on location and title/company
    /// - `page` - 1-based page request
    ///
    /// # Returns
    /// - `Ok((Vec<Job>, u64))` - Postings on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_active_paginated(
        &self,
        filter: JobFilter,
        page: PageRequest,
    ) -> Result<(Vec<Job>, u64), DbErr> {
        let mut condition = Condition::all().add(entity::job::Column::IsActive.eq(true));

        if let Some(job_type) = filter.job_type {
            condition = condition.add(entity::job::Column::JobType.eq(job_type));
        }
        if let Some(location) = filter.location {
            condition =
                condition.add(contains_literal(entity::job::Column::Location, &location));
        }
        if let Some(search) = filter.search {
            condition = condition.add(
                Condition::any()
                    .add(contains_literal(entity::job::Column::Title, &search))
                    .add(contains_literal(entity::job::Column::Company, &search)),
            );
        }

        let paginator = entity::prelude::Job::find()
            .filter(condition)
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::job::Column::CreatedAt)
            .order_by_desc(entity::job::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        Ok((self.with_counts(rows).await?, total))
    }

    /// Gets every posting created by a user, including deactivated ones.
    pub async fn get_by_poster(&self, user_id: i32) -> Result<Vec<Job>, DbErr> {
        let rows = entity::prelude::Job::find()
            .filter(entity::job::Column::PostedBy.eq(user_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::job::Column::CreatedAt)
            .order_by_desc(entity::job::Column::Id)
            .all(self.db)
            .await?;

        self.with_counts(rows).await
    }

    /// Applies a partial update to a posting.
    ///
    /// # Returns
    /// - `Ok(Some(Job))` - The updated posting
    /// - `Ok(None)` - No posting with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateJobParams) -> Result<Option<Job>, DbErr> {
        let Some(job) = entity::prelude::Job::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::job::ActiveModel = job.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(company) = params.company {
            active.company = ActiveValue::Set(company);
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(Some(location).filter(|l| !l.is_empty()));
        }
        if let Some(job_type) = params.job_type {
            active.job_type = ActiveValue::Set(job_type);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(requirements) = params.requirements {
            active.requirements = ActiveValue::Set(Some(requirements).filter(|r| !r.is_empty()));
        }
        if let Some(salary) = params.salary {
            active.salary = ActiveValue::Set(Some(salary).filter(|s| !s.is_empty()));
        }
        if let Some(deadline) = params.application_deadline {
            active.application_deadline = ActiveValue::Set(Some(deadline));
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Soft-deletes a posting by clearing `is_active`.
    ///
    /// # Returns
    /// - `Ok(true)` - Posting deactivated
    /// - `Ok(false)` - No posting with that ID
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let Some(job) = entity::prelude::Job::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::job::ActiveModel = job.into();
        active.is_active = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(true)
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    /// Attaches application counts to job rows with one extra query.
    async fn with_counts(
        &self,
        rows: Vec<(entity::job::Model, Option<entity::user::Model>)>,
    ) -> Result<Vec<Job>, DbErr> {
        let ids: Vec<i32> = rows.iter().map(|(job, _)| job.id).collect();
        let counts = count_by_foreign_key::<entity::prelude::JobApplication, _>(
            self.db,
            entity::job_application::Column::JobId,
            &ids,
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|(job, poster)| {
                let count = counts.get(&job.id).copied().unwrap_or(0);
                Job::from_entity(job, poster, count)
            })
            .collect())
    }
}
