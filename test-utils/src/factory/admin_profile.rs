//! Admin profile factory for creating test profile entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an admin profile for the given user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the admin user owning the profile
///
/// # Returns
/// - `Ok(entity::admin_profile::Model)` - Created profile with default department
///   and designation
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin_profile(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::admin_profile::Model, DbErr> {
    let now = Utc::now();
    entity::admin_profile::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        department: ActiveValue::Set(Some("Alumni Relations".to_string())),
        designation: ActiveValue::Set(Some("Coordinator".to_string())),
        phone: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
