//! Job application factory.

use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an application with status `Applied` from a student to a job.
///
/// # Arguments
/// - `db` - Database connection
/// - `job_id` - ID of the job applied to
/// - `student_id` - ID of the applying student
///
/// # Returns
/// - `Ok(entity::job_application::Model)` - Created application
/// - `Err(DbErr)` - Database error during insert
pub async fn create_application(
    db: &DatabaseConnection,
    job_id: i32,
    student_id: i32,
) -> Result<entity::job_application::Model, DbErr> {
    entity::job_application::ActiveModel {
        job_id: ActiveValue::Set(job_id),
        student_id: ActiveValue::Set(student_id),
        cover_letter: ActiveValue::Set(None),
        status: ActiveValue::Set(ApplicationStatus::Applied),
        applied_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
