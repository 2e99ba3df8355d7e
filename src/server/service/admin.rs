//! Admin profile, user management and dashboard statistics.

use chrono::Utc;
use entity::sea_orm_active_enums::{MentorshipStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        admin_profile::AdminProfileRepository, donation::DonationRepository,
        event::EventRepository, job::JobRepository, job_application::JobApplicationRepository,
        mentorship::MentorshipRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        admin::{AdminProfile, DashboardStats, UpsertAdminProfileParams},
        page::{Page, PageRequest},
        user::{normalize_email, validate_password, CreateUserParams, User, UserFilter},
    },
    util::password::hash_password,
};

const BOOTSTRAP_ADMIN_NAME: &str = "Administrator";

/// Service providing business logic for administration.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).admin_exists().await?)
    }

    /// Creates the first admin account from configured credentials.
    ///
    /// # Arguments
    /// - `email` - Login email for the admin
    /// - `password` - Plain text password, hashed before storage
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The created admin
    /// - `Ok(None)` - An account already uses the email, nothing was created
    /// - `Err(AppError::BadRequest)` - Invalid email or too short password
    /// - `Err(AppError)` - Database or hashing error
    pub async fn bootstrap_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let email = normalize_email(email)?;
        validate_password(password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Ok(None);
        }

        let admin = user_repo
            .create(CreateUserParams {
                name: BOOTSTRAP_ADMIN_NAME.to_string(),
                email,
                password_hash: hash_password(password)?,
                role: UserRole::Admin,
            })
            .await?;

        Ok(Some(admin))
    }

    /// Gets the caller's admin profile.
    ///
    /// # Returns
    /// - `Ok(AdminProfile)` - The profile
    /// - `Err(AppError::NotFound)` - No profile saved yet
    pub async fn get_profile(&self, user_id: i32) -> Result<AdminProfile, AppError> {
        AdminProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Admin profile not found".to_string()))
    }

    pub async fn upsert_profile(
        &self,
        params: UpsertAdminProfileParams,
    ) -> Result<AdminProfile, AppError> {
        Ok(AdminProfileRepository::new(self.db).upsert(params).await?)
    }

    pub async fn list_users(
        &self,
        filter: UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, AppError> {
        let (items, total) = UserRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page {
            items,
            total,
            request: page,
        })
    }

    /// Deactivates or reactivates a user account.
    ///
    /// # Arguments
    /// - `actor` - The admin performing the change
    /// - `user_id` - Target account
    /// - `is_active` - New activation flag
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Admin tried to deactivate their own account
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_user_status(
        &self,
        actor: &User,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, AppError> {
        if actor.id == user_id && !is_active {
            return Err(AppError::BadRequest(
                "You cannot deactivate your own account".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_active(user_id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "Admin {} set user {} active={}",
            actor.id,
            user.id,
            user.is_active
        );

        Ok(user)
    }

    /// Collects the dashboard counters.
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let users = UserRepository::new(self.db);
        let donations = DonationRepository::new(self.db);
        let mentorships = MentorshipRepository::new(self.db);

        Ok(DashboardStats {
            total_users: users.count_all().await?,
            active_users: users.count_active().await?,
            admins: users.count_by_role(UserRole::Admin).await?,
            alumni: users.count_by_role(UserRole::Alumni).await?,
            students: users.count_by_role(UserRole::Student).await?,
            active_jobs: JobRepository::new(self.db).count_active().await?,
            total_applications: JobApplicationRepository::new(self.db).count_all().await?,
            donation_count: donations.count_all().await?,
            donation_total_cents: donations.total_cents(None).await?,
            mentorships_pending: mentorships
                .count_by_status(MentorshipStatus::Pending)
                .await?,
            mentorships_accepted: mentorships
                .count_by_status(MentorshipStatus::Accepted)
                .await?,
            mentorships_rejected: mentorships
                .count_by_status(MentorshipStatus::Rejected)
                .await?,
            mentorships_completed: mentorships
                .count_by_status(MentorshipStatus::Completed)
                .await?,
            upcoming_events: EventRepository::new(self.db)
                .count_upcoming(Utc::now())
                .await?,
        })
    }
}
