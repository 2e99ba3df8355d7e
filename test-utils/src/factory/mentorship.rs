//! Mentorship request factory.

use chrono::Utc;
use entity::sea_orm_active_enums::MentorshipStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a mentorship request in the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `mentor_id` - ID of the addressed alumni mentor
/// - `mentee_id` - ID of the requesting student
/// - `status` - Initial status of the request
///
/// # Returns
/// - `Ok(entity::mentorship::Model)` - Created request with topic `"Career guidance"`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_mentorship(
    db: &DatabaseConnection,
    mentor_id: i32,
    mentee_id: i32,
    status: MentorshipStatus,
) -> Result<entity::mentorship::Model, DbErr> {
    let now = Utc::now();
    entity::mentorship::ActiveModel {
        mentor_id: ActiveValue::Set(mentor_id),
        mentee_id: ActiveValue::Set(mentee_id),
        topic: ActiveValue::Set("Career guidance".to_string()),
        message: ActiveValue::Set(None),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
