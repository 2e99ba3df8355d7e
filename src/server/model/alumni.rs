//! Alumni profile domain models and parameters.

use chrono::{DateTime, Datelike, Utc};

use crate::{
    model::alumni::{AlumniProfileDto, UpsertAlumniProfileDto},
    server::{error::AppError, model::normalize_optional},
};

pub const MIN_GRADUATION_YEAR: i32 = 1950;
/// Students may list an expected graduation year this many years ahead.
pub const MAX_GRADUATION_YEARS_AHEAD: i32 = 6;

/// Alumni profile joined with the owning account's name and email.
#[derive(Debug, Clone, PartialEq)]
pub struct AlumniProfile {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub graduation_year: i32,
    pub degree: Option<String>,
    pub department: Option<String>,
    pub current_company: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
    pub bio: Option<String>,
    pub is_visible: bool,
    pub updated_at: DateTime<Utc>,
}

impl AlumniProfile {
    /// Converts the profile entity and its owner to a domain model.
    ///
    /// A `skills` column that does not hold a JSON string array is read as empty.
    pub fn from_entity(entity: entity::alumni_profile::Model, user: entity::user::Model) -> Self {
        let skills = serde_json::from_value::<Vec<String>>(entity.skills).unwrap_or_default();

        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: user.name,
            email: user.email,
            graduation_year: entity.graduation_year,
            degree: entity.degree,
            department: entity.department,
            current_company: entity.current_company,
            job_title: entity.job_title,
            location: entity.location,
            skills,
            linkedin_url: entity.linkedin_url,
            bio: entity.bio,
            is_visible: entity.is_visible,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AlumniProfileDto {
        AlumniProfileDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            graduation_year: self.graduation_year,
            degree: self.degree,
            department: self.department,
            current_company: self.current_company,
            job_title: self.job_title,
            location: self.location,
            skills: self.skills,
            linkedin_url: self.linkedin_url,
            bio: self.bio,
            is_visible: self.is_visible,
            updated_at: self.updated_at,
        }
    }
}

/// Create-or-update parameters for a user's own alumni profile.
#[derive(Debug, Clone)]
pub struct UpsertAlumniProfileParams {
    pub user_id: i32,
    pub graduation_year: i32,
    pub degree: Option<String>,
    pub department: Option<String>,
    pub current_company: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
    pub bio: Option<String>,
    /// `None` keeps the stored value, or `true` for a new profile.
    pub is_visible: Option<bool>,
}

impl UpsertAlumniProfileParams {
    /// Converts and validates the request DTO.
    ///
    /// # Returns
    /// - `Ok(UpsertAlumniProfileParams)` - Trimmed fields, blank skills removed
    /// - `Err(AppError::BadRequest)` - Graduation year outside
    ///   `MIN_GRADUATION_YEAR..=current year + MAX_GRADUATION_YEARS_AHEAD`
    pub fn from_dto(user_id: i32, dto: UpsertAlumniProfileDto) -> Result<Self, AppError> {
        let max_year = Utc::now().year() + MAX_GRADUATION_YEARS_AHEAD;
        if !(MIN_GRADUATION_YEAR..=max_year).contains(&dto.graduation_year) {
            return Err(AppError::BadRequest(format!(
                "Graduation year must be between {} and {}",
                MIN_GRADUATION_YEAR, max_year
            )));
        }

        let skills = dto
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            user_id,
            graduation_year: dto.graduation_year,
            degree: normalize_optional(dto.degree),
            department: normalize_optional(dto.department),
            current_company: normalize_optional(dto.current_company),
            job_title: normalize_optional(dto.job_title),
            location: normalize_optional(dto.location),
            skills,
            linkedin_url: normalize_optional(dto.linkedin_url),
            bio: normalize_optional(dto.bio),
            is_visible: dto.is_visible,
        })
    }
}

/// Directory filters. Text filters are case-insensitive substring matches.
#[derive(Debug, Clone, Default)]
pub struct AlumniFilter {
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub company: Option<String>,
    /// Matches the alumni's name, company or job title.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(graduation_year: i32) -> UpsertAlumniProfileDto {
        UpsertAlumniProfileDto {
            graduation_year,
            degree: Some(" B.Tech ".to_string()),
            department: Some("  ".to_string()),
            current_company: None,
            job_title: None,
            location: None,
            skills: vec!["rust".to_string(), " ".to_string()],
            linkedin_url: None,
            bio: None,
            is_visible: None,
        }
    }

    #[test]
    fn trims_fields_and_drops_blank_skills() {
        let params = UpsertAlumniProfileParams::from_dto(1, dto(2015)).unwrap();

        assert_eq!(params.degree.as_deref(), Some("B.Tech"));
        assert_eq!(params.department, None);
        assert_eq!(params.skills, vec!["rust".to_string()]);
    }

    #[test]
    fn graduation_year_bounds() {
        let max_year = Utc::now().year() + MAX_GRADUATION_YEARS_AHEAD;

        assert!(UpsertAlumniProfileParams::from_dto(1, dto(MIN_GRADUATION_YEAR)).is_ok());
        assert!(UpsertAlumniProfileParams::from_dto(1, dto(max_year)).is_ok());
        assert!(UpsertAlumniProfileParams::from_dto(1, dto(MIN_GRADUATION_YEAR - 1)).is_err());
        assert!(UpsertAlumniProfileParams::from_dto(1, dto(max_year + 1)).is_err());
    }
}
