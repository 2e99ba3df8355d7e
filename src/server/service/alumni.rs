use sea_orm::DatabaseConnection;

use crate::server::{
    data::alumni_profile::AlumniProfileRepository,
    error::AppError,
    model::{
        alumni::{AlumniFilter, AlumniProfile, UpsertAlumniProfileParams},
        page::{Page, PageRequest},
    },
};

pub struct AlumniService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlumniService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's own profile, hidden or not.
    ///
    /// # Returns
    /// - `Ok(AlumniProfile)` - The profile
    /// - `Err(AppError::NotFound)` - The alumni has not created a profile yet
    pub async fn get_own(&self, user_id: i32) -> Result<AlumniProfile, AppError> {
        AlumniProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Creates or replaces the caller's profile.
    ///
    /// # Returns
    /// - `Ok((AlumniProfile, bool))` - Stored profile and whether it was newly created
    pub async fn upsert(
        &self,
        params: UpsertAlumniProfileParams,
    ) -> Result<(AlumniProfile, bool), AppError> {
        let user_id = params.user_id;
        let (profile, created) = AlumniProfileRepository::new(self.db).upsert(params).await?;

        if created {
            tracing::info!("Created alumni profile for user {}", user_id);
        }

        Ok((profile, created))
    }

    pub async fn directory(
        &self,
        filter: AlumniFilter,
        page: PageRequest,
    ) -> Result<Page<AlumniProfile>, AppError> {
        let (items, total) = AlumniProfileRepository::new(self.db)
            .get_directory_paginated(filter, page)
            .await?;

        Ok(Page {
            items,
            total,
            request: page,
        })
    }

    /// Gets one profile as listed in the directory.
    ///
    /// # Returns
    /// - `Ok(AlumniProfile)` - Visible profile of an active alumni
    /// - `Err(AppError::NotFound)` - Missing, hidden or owned by a deactivated account
    pub async fn get_visible(&self, user_id: i32) -> Result<AlumniProfile, AppError> {
        AlumniProfileRepository::new(self.db)
            .find_visible_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alumni profile not found".to_string()))
    }
}
