//! Job factory for creating test job postings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::JobType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test jobs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let job = JobFactory::new(&db, poster.id)
///     .job_type(JobType::Internship)
///     .location("Bengaluru")
///     .build()
///     .await?;
/// ```
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    posted_by: i32,
    title: String,
    company: String,
    location: Option<String>,
    job_type: JobType,
    application_deadline: Option<DateTime<Utc>>,
    is_active: bool,
}

impl<'a> JobFactory<'a> {
    /// Creates a new JobFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Software Engineer {id}"`
    /// - company: `"Acme Corp"`
    /// - job_type: `FullTime`
    /// - no deadline, active
    pub fn new(db: &'a DatabaseConnection, posted_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            posted_by,
            title: format!("Software Engineer {}", id),
            company: "Acme Corp".to_string(),
            location: None,
            job_type: JobType::FullTime,
            application_deadline: None,
            is_active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.job_type = job_type;
        self
    }

    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.application_deadline = Some(deadline);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the job entity into the database.
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        let now = Utc::now();
        entity::job::ActiveModel {
            posted_by: ActiveValue::Set(self.posted_by),
            title: ActiveValue::Set(self.title),
            company: ActiveValue::Set(self.company),
            location: ActiveValue::Set(self.location),
            job_type: ActiveValue::Set(self.job_type),
            description: ActiveValue::Set("Build and maintain services.".to_string()),
            requirements: ActiveValue::Set(None),
            salary: ActiveValue::Set(None),
            application_deadline: ActiveValue::Set(self.application_deadline),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active full-time job posted by the given user.
pub async fn create_job(
    db: &DatabaseConnection,
    posted_by: i32,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, posted_by).build().await
}
