//! Account registration, login and password changes.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{validate_password, CreateUserParams, RegisterParams, User},
    util::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
};

/// Service issuing bearer tokens for user accounts.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt` - Keys used to sign issued tokens
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers an alumni or student account and signs a token for it.
    ///
    /// # Arguments
    /// - `params` - Validated registration input
    ///
    /// # Returns
    /// - `Ok((String, User))` - Bearer token and the created user
    /// - `Err(AuthError::RoleNotAllowed)` - Registration requested the admin role
    /// - `Err(AppError::BadRequest)` - Email is already registered
    /// - `Err(AppError)` - Database or hashing error
    pub async fn register(&self, params: RegisterParams) -> Result<(String, User), AppError> {
        if params.role == UserRole::Admin {
            return Err(AuthError::RoleNotAllowed.into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash: hash_password(&params.password)?,
                role: params.role,
            })
            .await?;

        tracing::info!("Registered user {} as {:?}", user.id, user.role);

        let token = self.jwt.issue(user.id, user.role)?;

        Ok((token, user))
    }

    /// Verifies credentials and signs a token.
    ///
    /// Unknown email and wrong password produce the same error so the response does
    /// not reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Bearer token and the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountDeactivated)` - Credentials are valid but the account is disabled
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user.id).into());
        }

        let token = self.jwt.issue(user.id, user.role)?;

        Ok((token, user))
    }

    /// Replaces the user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AuthError::IncorrectPassword)` - Current password does not match
    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        validate_password(new_password)?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(AuthError::IncorrectPassword(user.id).into());
        }

        UserRepository::new(self.db)
            .update_password_hash(user.id, hash_password(new_password)?)
            .await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }
}
