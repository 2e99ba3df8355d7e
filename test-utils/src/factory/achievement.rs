//! Achievement factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test achievements.
pub struct AchievementFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    category: Option<String>,
    is_visible: bool,
}

impl<'a> AchievementFactory<'a> {
    /// Creates a new AchievementFactory with a unique title, no category, visible.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            title: format!("Achievement {}", next_id()),
            category: None,
            is_visible: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    /// Builds and inserts the achievement entity into the database.
    pub async fn build(self) -> Result<entity::achievement::Model, DbErr> {
        entity::achievement::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            achieved_on: ActiveValue::Set(None),
            is_visible: ActiveValue::Set(self.is_visible),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible achievement for the given user.
pub async fn create_achievement(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::achievement::Model, DbErr> {
    AchievementFactory::new(db, user_id).build().await
}
