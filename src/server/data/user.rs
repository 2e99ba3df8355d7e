//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation, lookups by ID and email, admin listing with filters, activation
//! state and per-role counts.

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::PageRequest,
    user::{CreateUserParams, User, UserFilter},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active account.
    ///
    /// # Arguments
    /// - `params` - Name, normalized email, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized (lowercased, trimmed) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of users, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional role and activation filters
    /// - `page` - 1-based page request
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Users on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: UserFilter,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::user::Column::IsActive.eq(is_active));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok((users, total))
    }

    /// Sets the activation flag of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    pub async fn update_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active: entity::user::ActiveModel = entity.into();
        active.password_hash = ActiveValue::Set(password_hash);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    /// Checks whether any admin account exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        Ok(self.count_by_role(UserRole::Admin).await? > 0)
    }

    pub async fn count_by_role(&self, role: UserRole) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .count(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }
}
