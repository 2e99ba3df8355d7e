use test_utils::{builder::TestBuilder, factory, factory::donation::create_donation_with_visibility};

use crate::server::{
    error::AppError,
    model::{donation::ANONYMOUS_DONOR, user::User},
    service::donation::DonationService,
};

/// Tests donation summaries.
///
/// Verifies the caller's own total, the grand total, and that anonymous donations
/// are masked in the third-party view but not in the donor's own view.
///
/// Expected: Ok with matching totals and masked donor names
#[tokio::test]
async fn summarizes_and_masks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Donation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DonationService::new(db);

    let donor = factory::create_alumni(db).await?;
    let other = factory::create_alumni(db).await?;
    create_donation_with_visibility(db, donor.id, 10_000, true).await?;
    factory::create_donation(db, other.id, 2_550).await?;

    let mine = service.get_mine(&User::from_entity(donor.clone())).await?;
    assert_eq!(mine.total_cents, 10_000);
    assert_eq!(mine.donations.len(), 1);
    assert_eq!(mine.donations[0].clone().into_dto().donor_name, donor.name);

    let all = service.get_all().await?;
    assert_eq!(all.total_cents, 12_550);

    let masked: Vec<_> = all
        .donations
        .into_iter()
        .map(|d| d.into_masked_dto())
        .collect();
    let anonymous = masked.iter().find(|d| d.is_anonymous).unwrap();
    assert_eq!(anonymous.donor_name, ANONYMOUS_DONOR);
    assert_eq!(anonymous.donor_id, None);
    assert!(masked.iter().any(|d| d.donor_name == other.name));

    Ok(())
}
