//! Alumni profile repository.
//!
//! Profiles are always returned joined with their owning user so the directory can
//! show names without a second lookup.

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::contains_literal,
    model::{
        alumni::{AlumniFilter, AlumniProfile, UpsertAlumniProfileParams},
        page::PageRequest,
    },
};

pub struct AlumniProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlumniProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the profile owned by a user regardless of visibility.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<AlumniProfile>, DbErr> {
        let result = entity::prelude::AlumniProfile::find()
            .filter(entity::alumni_profile::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(profile, user)| {
            user.map(|user| AlumniProfile::from_entity(profile, user))
        }))
    }

    /// Gets a profile for the public directory.
    ///
    /// Returns `None` unless the profile is visible and its owner is an active
    /// alumni account.
    pub async fn find_visible_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<AlumniProfile>, DbErr> {
        let result = entity::prelude::AlumniProfile::find()
            .filter(entity::alumni_profile::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .filter(directory_condition())
            .one(self.db)
            .await?;

        Ok(result.and_then(|(profile, user)| {
            user.map(|user| AlumniProfile::from_entity(profile, user))
        }))
    }

    /// Creates the user's profile or updates the existing one.
    ///
    /// # Arguments
    /// - `params` - Full profile content. `is_visible: None` keeps the stored flag
    ///   (or `true` for a new profile)
    ///
    /// # Returns
    /// - `Ok((AlumniProfile, bool))` - The stored profile and whether it was created
    /// - `Err(DbErr)` - Database error or missing owner
    pub async fn upsert(
        &self,
        params: UpsertAlumniProfileParams,
    ) -> Result<(AlumniProfile, bool), DbErr> {
        let now = Utc::now();
        let user_id = params.user_id;
        let existing = entity::prelude::AlumniProfile::find()
            .filter(entity::alumni_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;
        let created = existing.is_none();

        let mut active = match existing {
            Some(model) => {
                let mut active: entity::alumni_profile::ActiveModel = model.into();
                if let Some(is_visible) = params.is_visible {
                    active.is_visible = ActiveValue::Set(is_visible);
                }
                active
            }
            None => entity::alumni_profile::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                is_visible: ActiveValue::Set(params.is_visible.unwrap_or(true)),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            },
        };

        active.graduation_year = ActiveValue::Set(params.graduation_year);
        active.degree = ActiveValue::Set(params.degree);
        active.department = ActiveValue::Set(params.department);
        active.current_company = ActiveValue::Set(params.current_company);
        active.job_title = ActiveValue::Set(params.job_title);
        active.location = ActiveValue::Set(params.location);
        active.skills = ActiveValue::Set(serde_json::json!(params.skills));
        active.linkedin_url = ActiveValue::Set(params.linkedin_url);
        active.bio = ActiveValue::Set(params.bio);
        active.updated_at = ActiveValue::Set(now);

        if created {
            active.insert(self.db).await?;
        } else {
            active.update(self.db).await?;
        }

        let profile = self
            .find_by_user_id(user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Alumni profile for user {} not found after upsert",
                user_id
            )))?;

        Ok((profile, created))
    }

    /// Gets a page of the public alumni directory ordered by name.
    ///
    /// # Arguments
    /// - `filter` - Department, graduation year, company and free-text search
    /// - `page` - 1-based page request
    ///
    /// # Returns
    /// - `Ok((Vec<AlumniProfile>, u64))` - Profiles on the page and total matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_directory_paginated(
        &self,
        filter: AlumniFilter,
        page: PageRequest,
    ) -> Result<(Vec<AlumniProfile>, u64), DbErr> {
        let mut condition = directory_condition();

        if let Some(department) = filter.department {
            condition = condition.add(contains_literal(
                entity::alumni_profile::Column::Department,
                &department,
            ));
        }
        if let Some(year) = filter.graduation_year {
            condition = condition.add(entity::alumni_profile::Column::GraduationYear.eq(year));
        }
        if let Some(company) = filter.company {
            condition = condition.add(contains_literal(
                entity::alumni_profile::Column::CurrentCompany,
                &company,
            ));
        }
        if let Some(search) = filter.search {
            condition = condition.add(
                Condition::any()
                    .add(contains_literal(entity::user::Column::Name, &search))
                    .add(contains_literal(
                        entity::alumni_profile::Column::CurrentCompany,
                        &search,
                    ))
                    .add(contains_literal(
                        entity::alumni_profile::Column::JobTitle,
                        &search,
                    )),
            );
        }

        let paginator = entity::prelude::AlumniProfile::find()
            .find_also_related(entity::prelude::User)
            .filter(condition)
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::alumni_profile::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let profiles = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .filter_map(|(profile, user)| {
                user.map(|user| AlumniProfile::from_entity(profile, user))
            })
            .collect();

        Ok((profiles, total))
    }
}

/// Visible profile owned by an active alumni account.
fn directory_condition() -> Condition {
    Condition::all()
        .add(entity::alumni_profile::Column::IsVisible.eq(true))
        .add(entity::user::Column::IsActive.eq(true))
        .add(entity::user::Column::Role.eq(UserRole::Alumni))
}
