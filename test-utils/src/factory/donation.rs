//! Donation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a non-anonymous donation.
///
/// # Arguments
/// - `db` - Database connection
/// - `donor_id` - ID of the donating alumni user
/// - `amount_cents` - Donated amount in cents
///
/// # Returns
/// - `Ok(entity::donation::Model)` - Created donation with purpose `"Scholarship Fund"`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_donation(
    db: &DatabaseConnection,
    donor_id: i32,
    amount_cents: i64,
) -> Result<entity::donation::Model, DbErr> {
    create_donation_with_visibility(db, donor_id, amount_cents, false).await
}

/// Creates a donation with an explicit anonymity flag.
pub async fn create_donation_with_visibility(
    db: &DatabaseConnection,
    donor_id: i32,
    amount_cents: i64,
    is_anonymous: bool,
) -> Result<entity::donation::Model, DbErr> {
    entity::donation::ActiveModel {
        donor_id: ActiveValue::Set(donor_id),
        amount_cents: ActiveValue::Set(amount_cents),
        purpose: ActiveValue::Set("Scholarship Fund".to_string()),
        message: ActiveValue::Set(None),
        is_anonymous: ActiveValue::Set(is_anonymous),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
