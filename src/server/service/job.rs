//! Job board business logic.
//!
//! Postings are managed by the alumni who posted them or by any admin. Students apply
//! once per posting while it is active and before its deadline.

use chrono::Utc;
use entity::sea_orm_active_enums::{ApplicationStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{job::JobRepository, job_application::JobApplicationRepository},
    error::AppError,
    model::{
        job::{
            CreateJobParams, Job, JobApplication, JobFilter, StudentApplication, UpdateJobParams,
        },
        page::{Page, PageRequest},
        user::User,
    },
};

/// Service providing business logic for job postings and applications.
pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new JobService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active postings, newest first.
    pub async fn list_active(
        &self,
        filter: JobFilter,
        page: PageRequest,
    ) -> Result<Page<Job>, AppError> {
        let (items, total) = JobRepository::new(self.db)
            .get_active_paginated(filter, page)
            .await?;

        Ok(Page {
            items,
            total,
            request: page,
        })
    }

    /// Gets an active posting.
    ///
    /// # Returns
    /// - `Ok(Job)` - The posting with poster name and application count
    /// - `Err(AppError::NotFound)` - Missing or deactivated posting
    pub async fn get_active(&self, id: i32) -> Result<Job, AppError> {
        match JobRepository::new(self.db).get_by_id(id).await? {
            Some(job) if job.is_active => Ok(job),
            _ => Err(job_not_found()),
        }
    }

    pub async fn create(&self, params: CreateJobParams) -> Result<Job, AppError> {
        let job = JobRepository::new(self.db).create(params).await?;

        tracing::info!("User {} posted job {}", job.posted_by, job.id);

        Ok(job)
    }

    /// Applies a partial update to a posting.
    ///
    /// # Returns
    /// - `Ok(Job)` - The updated posting
    /// - `Err(AppError::NotFound)` - No posting with that ID
    /// - `Err(AppError::Forbidden)` - Caller is neither the poster nor an admin
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateJobParams,
    ) -> Result<Job, AppError> {
        let job_repo = JobRepository::new(self.db);
        let job = job_repo.get_by_id(id).await?.ok_or_else(job_not_found)?;
        ensure_can_manage(actor, &job)?;

        job_repo.update(id, params).await?.ok_or_else(job_not_found)
    }

    /// Soft deletes a posting.
    ///
    /// # Returns
    /// - `Ok(())` - Posting deactivated
    /// - `Err(AppError::NotFound)` - No posting with that ID
    /// - `Err(AppError::Forbidden)` - Caller is neither the poster nor an admin
    pub async fn deactivate(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let job_repo = JobRepository::new(self.db);
        let job = job_repo.get_by_id(id).await?.ok_or_else(job_not_found)?;
        ensure_can_manage(actor, &job)?;

        job_repo.deactivate(id).await?;

        tracing::info!("User {} deactivated job {}", actor.id, id);

        Ok(())
    }

    /// Lists everything the caller posted, including deactivated postings.
    pub async fn get_mine(&self, actor: &User) -> Result<Vec<Job>, AppError> {
        Ok(JobRepository::new(self.db).get_by_poster(actor.id).await?)
    }

    /// Submits a student's application.
    ///
    /// # Returns
    /// - `Ok(JobApplication)` - The new application in the `applied` state
    /// - `Err(AppError::NotFound)` - Missing or deactivated posting
    /// - `Err(AppError::BadRequest)` - Deadline passed or the student already applied
    pub async fn apply(
        &self,
        student: &User,
        job_id: i32,
        cover_letter: Option<String>,
    ) -> Result<JobApplication, AppError> {
        let job = self.get_active(job_id).await?;

        if !job.accepts_applications(Utc::now()) {
            return Err(AppError::BadRequest(
                "Application deadline has passed".to_string(),
            ));
        }

        let application_repo = JobApplicationRepository::new(self.db);
        if application_repo.exists(job_id, student.id).await? {
            return Err(AppError::BadRequest(
                "Already applied to this job".to_string(),
            ));
        }

        let application = application_repo
            .create(job_id, student.id, cover_letter)
            .await?;

        tracing::info!("Student {} applied to job {}", student.id, job_id);

        Ok(application)
    }

    pub async fn get_applied(&self, student: &User) -> Result<Vec<StudentApplication>, AppError> {
        Ok(JobApplicationRepository::new(self.db)
            .get_by_student(student.id)
            .await?)
    }

    /// Lists applicants of a posting.
    ///
    /// # Returns
    /// - `Ok(Vec<JobApplication>)` - Applications with student names and emails
    /// - `Err(AppError::NotFound)` - No posting with that ID
    /// - `Err(AppError::Forbidden)` - Caller is neither the poster nor an admin
    pub async fn get_applications(
        &self,
        actor: &User,
        job_id: i32,
    ) -> Result<Vec<JobApplication>, AppError> {
        let job = JobRepository::new(self.db)
            .get_by_id(job_id)
            .await?
            .ok_or_else(job_not_found)?;
        ensure_can_manage(actor, &job)?;

        Ok(JobApplicationRepository::new(self.db)
            .get_by_job(job_id)
            .await?)
    }

    /// Sets the review status of one application of a posting.
    ///
    /// # Returns
    /// - `Ok(JobApplication)` - The updated application
    /// - `Err(AppError::NotFound)` - Posting missing, or the application does not belong to it
    /// - `Err(AppError::Forbidden)` - Caller is neither the poster nor an admin
    pub async fn update_application_status(
        &self,
        actor: &User,
        job_id: i32,
        application_id: i32,
        status: ApplicationStatus,
    ) -> Result<JobApplication, AppError> {
        let job = JobRepository::new(self.db)
            .get_by_id(job_id)
            .await?
            .ok_or_else(job_not_found)?;
        ensure_can_manage(actor, &job)?;

        let application_repo = JobApplicationRepository::new(self.db);
        match application_repo.get_by_id(application_id).await? {
            Some(application) if application.job_id == job_id => {}
            _ => return Err(application_not_found()),
        }

        let application = application_repo
            .update_status(application_id, status)
            .await?
            .ok_or_else(application_not_found)?;

        tracing::info!(
            "User {} set application {} to {:?}",
            actor.id,
            application.id,
            application.status
        );

        Ok(application)
    }
}

fn ensure_can_manage(actor: &User, job: &Job) -> Result<(), AppError> {
    if actor.role == UserRole::Admin || job.posted_by == actor.id {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "Not authorized to manage this job".to_string(),
    ))
}

fn job_not_found() -> AppError {
    AppError::NotFound("Job not found".to_string())
}

fn application_not_found() -> AppError {
    AppError::NotFound("Application not found".to_string())
}
