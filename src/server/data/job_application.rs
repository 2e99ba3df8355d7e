//! Job application repository.

use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::job::{JobApplication, StudentApplication};

pub struct JobApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an application in the `applied` state.
    ///
    /// # Returns
    /// - `Ok(JobApplication)` - The stored application with the student's identity
    /// - `Err(DbErr)` - Database error, including the unique (job, student) index
    pub async fn create(
        &self,
        job_id: i32,
        student_id: i32,
        cover_letter: Option<String>,
    ) -> Result<JobApplication, DbErr> {
        let application = entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            student_id: ActiveValue::Set(student_id),
            cover_letter: ActiveValue::Set(cover_letter),
            status: ActiveValue::Set(ApplicationStatus::Applied),
            applied_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(application.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Job application with id {} not found after creation",
                application.id
            )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<JobApplication>, DbErr> {
        let result = entity::prelude::JobApplication::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(application, student)| JobApplication::from_entity(application, student)))
    }

    /// Checks whether a student already applied to a job.
    pub async fn exists(&self, job_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .filter(entity::job_application::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all applications to a job, oldest first.
    pub async fn get_by_job(&self, job_id: i32) -> Result<Vec<JobApplication>, DbErr> {
        let rows = entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::job_application::Column::AppliedAt)
            .order_by_asc(entity::job_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(application, student)| JobApplication::from_entity(application, student))
            .collect())
    }

    /// Gets a student's applications with the applied-to jobs, newest first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<StudentApplication>, DbErr> {
        let rows = entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::Job)
            .order_by_desc(entity::job_application::Column::AppliedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(application, job)| {
                job.map(|job| StudentApplication::from_entity(application, job))
            })
            .collect())
    }

    /// Sets the review status of an application.
    ///
    /// # Returns
    /// - `Ok(Some(JobApplication))` - The updated application
    /// - `Ok(None)` - No application with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>, DbErr> {
        let Some(application) = entity::prelude::JobApplication::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::job_application::ActiveModel = application.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::JobApplication::find().count(self.db).await
    }
}
