//! Mentorship request workflow.
//!
//! Students address a request to an alumni mentor. Only that mentor may answer it,
//! and the status only moves forward: `pending → accepted | rejected`, then
//! `accepted → completed`.

use entity::sea_orm_active_enums::{MentorshipStatus, UserRole};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{mentorship::MentorshipRepository, user::UserRepository},
    error::AppError,
    model::{
        mentorship::{can_transition, CreateMentorshipParams, Mentorship},
        user::User,
    },
};

/// Service providing business logic for mentorship requests.
pub struct MentorshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorshipService<'a> {
    /// Creates a new MentorshipService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a request from a student to an alumni mentor.
    ///
    /// # Returns
    /// - `Ok(Mentorship)` - The pending request
    /// - `Err(AppError::NotFound)` - Mentor missing, deactivated or not an alumni
    /// - `Err(AppError::BadRequest)` - A pending request to this mentor already exists
    pub async fn request(&self, params: CreateMentorshipParams) -> Result<Mentorship, AppError> {
        match UserRepository::new(self.db)
            .find_by_id(params.mentor_id)
            .await?
        {
            Some(mentor) if mentor.is_active && mentor.role == UserRole::Alumni => {}
            _ => return Err(AppError::NotFound("Mentor not found".to_string())),
        }

        let repo = MentorshipRepository::new(self.db);
        if repo
            .pending_exists(params.mentor_id, params.mentee_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "You already have a pending request with this mentor".to_string(),
            ));
        }

        let mentorship = repo.create(params).await?;

        tracing::info!(
            "Student {} requested mentorship {} from {}",
            mentorship.mentee_id,
            mentorship.id,
            mentorship.mentor_id
        );

        Ok(mentorship)
    }

    /// Requests addressed to an alumni, or sent by a student.
    pub async fn get_mine(&self, user: &User) -> Result<Vec<Mentorship>, AppError> {
        let repo = MentorshipRepository::new(self.db);

        let mentorships = match user.role {
            UserRole::Alumni => repo.get_for_mentor(user.id).await?,
            UserRole::Student => repo.get_for_mentee(user.id).await?,
            UserRole::Admin => Vec::new(),
        };

        Ok(mentorships)
    }

    /// Moves a request to a new status.
    ///
    /// # Returns
    /// - `Ok(Mentorship)` - The updated request
    /// - `Err(AppError::NotFound)` - No request with that ID
    /// - `Err(AppError::Forbidden)` - Caller is not the addressed mentor
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the current status
    pub async fn update_status(
        &self,
        actor: &User,
        id: i32,
        status: MentorshipStatus,
    ) -> Result<Mentorship, AppError> {
        let repo = MentorshipRepository::new(self.db);
        let mentorship = repo.get_by_id(id).await?.ok_or_else(not_found)?;

        if mentorship.mentor_id != actor.id {
            return Err(AppError::Forbidden(
                "Only the mentor can update this request".to_string(),
            ));
        }

        if !can_transition(mentorship.status, status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change status from {} to {}",
                mentorship.status.to_value(),
                status.to_value()
            )));
        }

        let updated = repo.update_status(id, status).await?.ok_or_else(not_found)?;

        tracing::info!("Mentor {} set mentorship {} to {:?}", actor.id, id, status);

        Ok(updated)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Mentorship not found".to_string())
}
