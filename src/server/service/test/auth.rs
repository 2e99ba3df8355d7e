use entity::sea_orm_active_enums::UserRole;
use test_utils::builder::TestBuilder;

use crate::{
    model::auth::RegisterDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::RegisterParams,
        service::auth::AuthService,
        util::jwt::JwtKeys,
    },
};

fn keys() -> JwtKeys {
    JwtKeys::new("service-test-secret", 1)
}

fn register_params(email: &str, role: &str) -> RegisterParams {
    RegisterParams::from_dto(RegisterDto {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        role: role.to_string(),
    })
    .unwrap()
}

/// Tests registering a student.
///
/// Verifies that the account is stored with a hashed password and that the issued
/// token resolves to the new user.
///
/// Expected: Ok((token, user))
#[tokio::test]
async fn registers_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let (token, user) = AuthService::new(db, &keys)
        .register(register_params("ada@example.com", "student"))
        .await?;

    assert_eq!(user.role, UserRole::Student);
    assert_ne!(user.password_hash, "secret123");
    assert_eq!(keys.verify(&token)?.sub, user.id);

    Ok(())
}

/// Tests that the admin role cannot be self-registered.
///
/// Expected: Err(AuthError::RoleNotAllowed)
#[tokio::test]
async fn rejects_admin_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let result = AuthService::new(db, &keys)
        .register(register_params("root@example.com", "admin"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleNotAllowed))
    ));

    Ok(())
}

/// Tests duplicate registration with differently cased email.
///
/// Expected: Err(AppError::BadRequest("User already exists"))
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let service = AuthService::new(db, &keys);

    service
        .register(register_params("ada@example.com", "alumni"))
        .await?;
    let result = service
        .register(register_params("ADA@Example.com", "student"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == "User already exists"));

    Ok(())
}

/// Tests login with correct and incorrect credentials.
///
/// Verifies that a wrong password and an unknown email produce the same error.
///
/// Expected: Ok for the right password, Err(InvalidCredentials) otherwise
#[tokio::test]
async fn login_checks_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let service = AuthService::new(db, &keys);

    let (_, registered) = service
        .register(register_params("ada@example.com", "alumni"))
        .await?;

    let (_, user) = service.login(" ADA@example.com ", "secret123").await?;
    assert_eq!(user.id, registered.id);

    assert!(matches!(
        service.login("ada@example.com", "wrong-password").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "secret123").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests login into a deactivated account.
///
/// Expected: Err(AuthError::AccountDeactivated)
#[tokio::test]
async fn login_rejects_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let service = AuthService::new(db, &keys);

    let (_, user) = service
        .register(register_params("ada@example.com", "alumni"))
        .await?;
    UserRepository::new(db).set_active(user.id, false).await?;

    assert!(matches!(
        service.login("ada@example.com", "secret123").await,
        Err(AppError::AuthErr(AuthError::AccountDeactivated(_)))
    ));

    Ok(())
}

/// Tests changing the password.
///
/// Verifies that a wrong current password is rejected and that the new password
/// works for login afterwards.
///
/// Expected: Err(IncorrectPassword), then Ok and login with the new password
#[tokio::test]
async fn changes_password_after_verification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let service = AuthService::new(db, &keys);

    let (_, user) = service
        .register(register_params("ada@example.com", "alumni"))
        .await?;

    assert!(matches!(
        service.change_password(&user, "not-it", "newsecret").await,
        Err(AppError::AuthErr(AuthError::IncorrectPassword(_)))
    ));
    assert!(matches!(
        service.change_password(&user, "secret123", "short").await,
        Err(AppError::BadRequest(_))
    ));

    service
        .change_password(&user, "secret123", "newsecret")
        .await?;

    assert!(service.login("ada@example.com", "newsecret").await.is_ok());
    assert!(service.login("ada@example.com", "secret123").await.is_err());

    Ok(())
}
