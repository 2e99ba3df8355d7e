use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::Alumni,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores the account as active with the given
/// role and that it can be found again by email.
///
/// Expected: Ok with active user retrievable by email
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com")).await?;

    assert!(user.is_active);
    assert_eq!(user.role, UserRole::Alumni);

    let found = repo.find_by_email("ada@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.email_exists("ada@example.com").await?);
    assert!(!repo.email_exists("other@example.com").await?);

    Ok(())
}

/// Tests the unique email index.
///
/// Verifies that inserting a second account with the same email fails at
/// the database level even without the service pre-check.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests admin detection.
///
/// Verifies that `admin_exists` only reports true once an admin account
/// has been created.
///
/// Expected: false then true
#[tokio::test]
async fn detects_admin_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::create_student(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    assert!(repo.admin_exists().await?);
    assert_eq!(repo.count_by_role(UserRole::Student).await?, 1);
    assert_eq!(repo.count_all().await?, 2);

    Ok(())
}
