use test_utils::{builder::TestBuilder, factory, factory::alumni_profile::AlumniProfileFactory};

use crate::server::{error::AppError, service::alumni::AlumniService};

/// Tests own-profile and directory lookups.
///
/// Verifies that a missing profile is not found, and that a hidden profile is
/// visible to its owner but not through the directory.
///
/// Expected: NotFound, then Ok for the owner and NotFound for the directory
#[tokio::test]
async fn hidden_profile_only_visible_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AlumniService::new(db);

    let alumni = factory::create_alumni(db).await?;

    assert!(matches!(
        service.get_own(alumni.id).await,
        Err(AppError::NotFound(_))
    ));

    AlumniProfileFactory::new(db, alumni.id)
        .visible(false)
        .build()
        .await?;

    assert!(!service.get_own(alumni.id).await?.is_visible);
    assert!(matches!(
        service.get_visible(alumni.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
