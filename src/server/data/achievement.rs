//! Achievement repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::achievement::{
    Achievement, CreateAchievementParams, UpdateAchievementParams,
};

pub struct AchievementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAchievementParams) -> Result<Achievement, DbErr> {
        let achievement = entity::achievement::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            achieved_on: ActiveValue::Set(params.achieved_on),
            is_visible: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(achievement.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Achievement with id {} not found after creation",
                achievement.id
            )))
    }

    /// Gets an achievement by ID, including hidden ones.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Achievement>, DbErr> {
        let result = entity::prelude::Achievement::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(achievement, owner)| Achievement::from_entity(achievement, owner)))
    }

    /// Gets visible achievements of active users, newest first.
    ///
    /// # Arguments
    /// - `category` - Exact category filter, `None` for all
    pub async fn get_visible(&self, category: Option<String>) -> Result<Vec<Achievement>, DbErr> {
        let mut query = entity::prelude::Achievement::find()
            .filter(entity::achievement::Column::IsVisible.eq(true))
            .find_also_related(entity::prelude::User)
            .filter(entity::user::Column::IsActive.eq(true));

        if let Some(category) = category {
            query = query.filter(entity::achievement::Column::Category.eq(category));
        }

        let rows = query
            .order_by_desc(entity::achievement::Column::CreatedAt)
            .order_by_desc(entity::achievement::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(achievement, owner)| Achievement::from_entity(achievement, owner))
            .collect())
    }

    /// Gets a user's visible achievements, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Achievement>, DbErr> {
        let rows = entity::prelude::Achievement::find()
            .filter(entity::achievement::Column::UserId.eq(user_id))
            .filter(entity::achievement::Column::IsVisible.eq(true))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::achievement::Column::CreatedAt)
            .order_by_desc(entity::achievement::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(achievement, owner)| Achievement::from_entity(achievement, owner))
            .collect())
    }

    /// Applies a partial update. Empty description or category clears the field.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAchievementParams,
    ) -> Result<Option<Achievement>, DbErr> {
        let Some(achievement) = entity::prelude::Achievement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::achievement::ActiveModel = achievement.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description).filter(|d| !d.is_empty()));
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(Some(category).filter(|c| !c.is_empty()));
        }
        if let Some(achieved_on) = params.achieved_on {
            active.achieved_on = ActiveValue::Set(Some(achieved_on));
        }
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Hides an achievement from every listing.
    pub async fn hide(&self, id: i32) -> Result<bool, DbErr> {
        let Some(achievement) = entity::prelude::Achievement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::achievement::ActiveModel = achievement.into();
        active.is_visible = ActiveValue::Set(false);
        active.update(self.db).await?;

        Ok(true)
    }
}
