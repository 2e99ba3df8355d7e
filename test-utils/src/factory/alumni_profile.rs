//! Alumni profile factory for creating test profile entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test alumni profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let profile = AlumniProfileFactory::new(&db, alumni.id)
///     .department("Computer Science")
///     .graduation_year(2015)
///     .build()
///     .await?;
/// ```
pub struct AlumniProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    graduation_year: i32,
    department: Option<String>,
    current_company: Option<String>,
    job_title: Option<String>,
    skills: Vec<String>,
    is_visible: bool,
}

impl<'a> AlumniProfileFactory<'a> {
    /// Creates a new AlumniProfileFactory with default values.
    ///
    /// Defaults:
    /// - graduation_year: `2018`
    /// - department: `"Computer Science"`
    /// - current_company / job_title: `None`
    /// - skills: empty
    /// - is_visible: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            graduation_year: 2018,
            department: Some("Computer Science".to_string()),
            current_company: None,
            job_title: None,
            skills: Vec::new(),
            is_visible: true,
        }
    }

    pub fn graduation_year(mut self, graduation_year: i32) -> Self {
        self.graduation_year = graduation_year;
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn current_company(mut self, company: impl Into<String>) -> Self {
        self.current_company = Some(company.into());
        self
    }

    pub fn job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    /// Builds and inserts the alumni profile entity into the database.
    pub async fn build(self) -> Result<entity::alumni_profile::Model, DbErr> {
        let now = Utc::now();
        entity::alumni_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            graduation_year: ActiveValue::Set(self.graduation_year),
            degree: ActiveValue::Set(Some("B.Tech".to_string())),
            department: ActiveValue::Set(self.department),
            current_company: ActiveValue::Set(self.current_company),
            job_title: ActiveValue::Set(self.job_title),
            location: ActiveValue::Set(None),
            skills: ActiveValue::Set(serde_json::json!(self.skills)),
            linkedin_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            is_visible: ActiveValue::Set(self.is_visible),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible alumni profile with default values for the given user.
pub async fn create_alumni_profile(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::alumni_profile::Model, DbErr> {
    AlumniProfileFactory::new(db, user_id).build().await
}
