use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::achievement::AchievementRepository,
    error::AppError,
    model::{
        achievement::{Achievement, CreateAchievementParams, UpdateAchievementParams},
        user::User,
    },
};

pub struct AchievementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAchievementParams) -> Result<Achievement, AppError> {
        Ok(AchievementRepository::new(self.db).create(params).await?)
    }

    /// Lists visible achievements of active users, optionally in one category.
    pub async fn list_visible(
        &self,
        category: Option<String>,
    ) -> Result<Vec<Achievement>, AppError> {
        Ok(AchievementRepository::new(self.db)
            .get_visible(category)
            .await?)
    }

    pub async fn get_mine(&self, user: &User) -> Result<Vec<Achievement>, AppError> {
        Ok(AchievementRepository::new(self.db)
            .get_by_user(user.id)
            .await?)
    }

    /// Updates an achievement owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Achievement)` - The updated achievement
    /// - `Err(AppError::NotFound)` - Missing or hidden achievement
    /// - `Err(AppError::Forbidden)` - Caller does not own it
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateAchievementParams,
    ) -> Result<Achievement, AppError> {
        let repo = AchievementRepository::new(self.db);
        let achievement = self.get_visible(&repo, id).await?;

        if achievement.user_id != actor.id {
            return Err(AppError::Forbidden(
                "Not authorized to update this achievement".to_string(),
            ));
        }

        repo.update(id, params).await?.ok_or_else(not_found)
    }

    /// Hides an achievement. Owners and admins may hide.
    pub async fn hide(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = AchievementRepository::new(self.db);
        let achievement = self.get_visible(&repo, id).await?;

        if achievement.user_id != actor.id && actor.role != UserRole::Admin {
            return Err(AppError::Forbidden(
                "Not authorized to delete this achievement".to_string(),
            ));
        }

        repo.hide(id).await?;

        tracing::info!("User {} hid achievement {}", actor.id, id);

        Ok(())
    }

    async fn get_visible(
        &self,
        repo: &AchievementRepository<'_>,
        id: i32,
    ) -> Result<Achievement, AppError> {
        match repo.get_by_id(id).await? {
            Some(achievement) if achievement.is_visible => Ok(achievement),
            _ => Err(not_found()),
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Achievement not found".to_string())
}
