use super::*;

/// Tests a valid token for an allowed role.
///
/// Verifies that the guard resolves the token subject to the stored user when the
/// user's role is in the allow-list.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let alumni = factory::create_alumni(db).await?;
    let headers = bearer_for(&keys, alumni.id, UserRole::Alumni);

    let user = AuthGuard::new(db, &keys, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    assert_eq!(user.id, alumni.id);
    assert_eq!(user.role, UserRole::Alumni);

    Ok(())
}

/// Tests an empty allow-list.
///
/// Expected: Ok(User) for any role
#[tokio::test]
async fn empty_role_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let student = factory::create_student(db).await?;
    let headers = bearer_for(&keys, student.id, UserRole::Student);

    let user = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(user.id, student.id);

    Ok(())
}

/// Tests a role outside the allow-list.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let student = factory::create_student(db).await?;
    let headers = bearer_for(&keys, student.id, UserRole::Student);

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[UserRole::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, student.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that the stored role wins over the role in the token.
///
/// Verifies that a token claiming `admin` does not grant admin access to a student.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn ignores_role_claimed_by_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let student = factory::create_student(db).await?;
    let headers = bearer_for(&keys, student.id, UserRole::Admin);

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[UserRole::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a request without an authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header that is not a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let student = factory::create_student(db).await?;
    let foreign = JwtKeys::new("some-other-secret", 1);
    let headers = bearer_for(&foreign, student.id, UserRole::Student);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user no longer exists.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = bearer_for(&keys, 4242, UserRole::Student);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(4242)))
    ));

    Ok(())
}

/// Tests a deactivated account.
///
/// Verifies that deactivation locks out existing tokens immediately.
///
/// Expected: Err(AuthError::AccountDeactivated)
#[tokio::test]
async fn rejects_deactivated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Alumni)
        .active(false)
        .build()
        .await?;
    let headers = bearer_for(&keys, user.id, UserRole::Alumni);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDeactivated(_)))
    ));

    Ok(())
}
