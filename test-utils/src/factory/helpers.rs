//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique emails and names so that factories never collide on
/// unique columns.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an alumni user and an active job posted by them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((poster, job))` - The alumni poster and their job
/// - `Err(DbErr)` - Database error during creation
pub async fn create_job_with_poster(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::job::Model), DbErr> {
    let poster = crate::factory::user::create_alumni(db).await?;
    let job = crate::factory::job::create_job(db, poster.id).await?;

    Ok((poster, job))
}

/// Creates an alumni mentor and a student mentee.
///
/// # Returns
/// - `Ok((mentor, mentee))` - The two users
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mentor_and_mentee(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user::Model), DbErr> {
    let mentor = crate::factory::user::create_alumni(db).await?;
    let mentee = crate::factory::user::create_student(db).await?;

    Ok((mentor, mentee))
}
