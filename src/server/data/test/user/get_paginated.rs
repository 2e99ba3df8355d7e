use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested subset of users
/// along with the total number of matching users.
///
/// Expected: Ok with 2 users on the first two pages, 1 on the third, total 5
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_student(db).await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_paginated(UserFilter::default(), PageRequest::new(Some(1), Some(2)))
        .await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo
        .get_paginated(UserFilter::default(), PageRequest::new(Some(3), Some(2)))
        .await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests role and activation filters.
///
/// Verifies that only users matching both filters are returned and counted.
///
/// Expected: Ok with the single inactive alumni
#[tokio::test]
async fn filters_by_role_and_activation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_alumni(db).await?;
    factory::create_student(db).await?;
    let inactive = factory::user::UserFactory::new(db)
        .role(UserRole::Alumni)
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(
            UserFilter {
                role: Some(UserRole::Alumni),
                is_active: Some(false),
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, inactive.id);

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty list and zero total
#[tokio::test]
async fn returns_empty_page_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db)
        .get_paginated(UserFilter::default(), PageRequest::default())
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
