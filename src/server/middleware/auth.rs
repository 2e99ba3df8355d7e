use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::jwt::JwtKeys,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticates a request from its `Authorization` header.
///
/// The token only identifies the user; the role and active flag are always read from
/// the database so that deactivation and role changes take effect immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Resolves the authenticated user and checks their role.
    ///
    /// # Arguments
    /// - `roles` - Roles allowed to proceed; an empty slice admits any active user
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated, active user with an allowed role
    /// - `Err(AuthError::MissingToken)` - No `Bearer` authorization header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    /// - `Err(AuthError::UserNotFound)` - Token subject no longer exists
    /// - `Err(AuthError::AccountDeactivated)` - User has been deactivated
    /// - `Err(AuthError::AccessDenied)` - User's role is not in `roles`
    pub async fn require(&self, roles: &[UserRole]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let claims = self.jwt.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user.id).into());
        }

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("role {:?} is not one of {:?}", user.role, roles),
            )
            .into());
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
