use super::*;

/// Tests deactivating and reactivating a user.
///
/// Expected: Ok(Some) with the flag flipped each time
#[tokio::test]
async fn toggles_activation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_student(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_active(user.id, false).await?.unwrap();
    assert!(!updated.is_active);
    assert_eq!(repo.count_active().await?, 0);

    let updated = repo.set_active(user.id, true).await?.unwrap();
    assert!(updated.is_active);

    Ok(())
}

/// Tests deactivating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).set_active(999, false).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests storing a new password hash.
///
/// Expected: Ok with the new hash persisted
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_student(db).await?;
    let repo = UserRepository::new(db);

    repo.update_password_hash(user.id, "new-hash".to_string())
        .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}
