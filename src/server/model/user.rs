//! User domain models and parameters.
//!
//! Provides the account model shared by all three roles together with the parameter
//! types used for registration and admin user management.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::ActiveEnum;

use crate::{
    model::{auth::RegisterDto, user::UserDto},
    server::{error::AppError, model::parse_enum},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Account with credentials and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Lowercased, trimmed email address.
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_value(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Validated registration input, before hashing.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl RegisterParams {
    /// Converts and validates a registration DTO.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Trimmed name, normalized email, parsed role
    /// - `Err(AppError::BadRequest)` - Blank name, malformed email, short password
    ///   or unknown role
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let email = normalize_email(&dto.email)?;
        validate_password(&dto.password)?;

        Ok(Self {
            name,
            email,
            password: dto.password,
            role: parse_enum(&dto.role, "role")?,
        })
    }
}

/// Parameters for inserting an account with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// Lowercases and trims an email, rejecting values without an `@`.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::BadRequest(
            "Please provide a valid email".to_string(),
        )),
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto(role: &str) -> RegisterDto {
        RegisterDto {
            name: "  Ada Lovelace ".to_string(),
            email: " Ada@Example.COM ".to_string(),
            password: "secret123".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn normalizes_registration_input() {
        let params = RegisterParams::from_dto(register_dto("alumni")).unwrap();

        assert_eq!(params.name, "Ada Lovelace");
        assert_eq!(params.email, "ada@example.com");
        assert_eq!(params.role, UserRole::Alumni);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(matches!(
            RegisterParams::from_dto(register_dto("professor")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("user@").is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
