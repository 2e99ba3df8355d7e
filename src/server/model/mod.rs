//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod achievement;
pub mod admin;
pub mod alumni;
pub mod donation;
pub mod event;
pub mod job;
pub mod mentorship;
pub mod page;
pub mod user;

use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parses a string-backed entity enum from its wire value.
///
/// # Arguments
/// - `value` - Wire value such as `"internship"`
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(T)` - The matching enum variant
/// - `Err(AppError::BadRequest)` - Value is not a known variant
pub fn parse_enum<T>(value: &str, field: &str) -> Result<T, AppError>
where
    T: ActiveEnum<Value = String>,
{
    T::try_from_value(&value.trim().to_lowercase())
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", field, value)))
}

/// Trims an optional text field, mapping blank input to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
