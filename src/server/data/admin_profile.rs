//! Admin profile repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::admin::{AdminProfile, UpsertAdminProfileParams};

pub struct AdminProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<AdminProfile>, DbErr> {
        let result = entity::prelude::AdminProfile::find()
            .filter(entity::admin_profile::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(profile, user)| {
            user.map(|user| AdminProfile::from_entity(profile, user))
        }))
    }

    /// Creates the admin's profile or overwrites the existing one.
    pub async fn upsert(&self, params: UpsertAdminProfileParams) -> Result<AdminProfile, DbErr> {
        let now = Utc::now();
        let user_id = params.user_id;
        let existing = entity::prelude::AdminProfile::find()
            .filter(entity::admin_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(model) => {
                let mut active: entity::admin_profile::ActiveModel = model.into();
                active.department = ActiveValue::Set(params.department);
                active.designation = ActiveValue::Set(params.designation);
                active.phone = ActiveValue::Set(params.phone);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?;
            }
            None => {
                entity::admin_profile::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    department: ActiveValue::Set(params.department),
                    designation: ActiveValue::Set(params.designation),
                    phone: ActiveValue::Set(params.phone),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        self.find_by_user_id(user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Admin profile for user {} not found after upsert",
                user_id
            )))
    }
}
