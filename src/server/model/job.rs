//! Job board domain models and parameters.
//!
//! Covers job postings, the applications students submit to them, and the parameter
//! types used to create, update and filter postings.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ApplicationStatus, JobType};
use sea_orm::ActiveEnum;

use crate::{
    model::job::{
        CreateJobDto, JobApplicationDto, JobDto, JobSummaryDto, StudentApplicationDto,
        UpdateJobDto,
    },
    server::{
        error::AppError,
        model::{normalize_optional, parse_enum},
    },
};

/// Job posting with its poster's name and number of applications.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i32,
    pub posted_by: i32,
    pub posted_by_name: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub application_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Converts a job entity at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The job row
    /// - `poster` - The posting user, `None` when the join found no row
    /// - `application_count` - Number of applications submitted to the job
    pub fn from_entity(
        entity: entity::job::Model,
        poster: Option<entity::user::Model>,
        application_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            posted_by: entity.posted_by,
            posted_by_name: poster.map(|u| u.name).unwrap_or_default(),
            title: entity.title,
            company: entity.company,
            location: entity.location,
            job_type: entity.job_type,
            description: entity.description,
            requirements: entity.requirements,
            salary: entity.salary,
            application_deadline: entity.application_deadline,
            is_active: entity.is_active,
            application_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether a student can still apply at `now`.
    pub fn accepts_applications(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.application_deadline.is_none_or(|deadline| deadline > now)
    }

    pub fn into_dto(self) -> JobDto {
        JobDto {
            id: self.id,
            posted_by: self.posted_by,
            posted_by_name: self.posted_by_name,
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type.to_value(),
            description: self.description,
            requirements: self.requirements,
            salary: self.salary,
            application_deadline: self.application_deadline,
            is_active: self.is_active,
            application_count: self.application_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateJobParams {
    pub posted_by: i32,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
}

impl CreateJobParams {
    /// Converts and validates the request DTO.
    ///
    /// # Returns
    /// - `Ok(CreateJobParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank title, company or description, unknown
    ///   job type, or a deadline that is not in the future
    pub fn from_dto(posted_by: i32, dto: CreateJobDto) -> Result<Self, AppError> {
        let params = Self {
            posted_by,
            title: required_text(dto.title, "Title")?,
            company: required_text(dto.company, "Company")?,
            location: normalize_optional(dto.location),
            job_type: parse_enum(&dto.job_type, "job type")?,
            description: required_text(dto.description, "Description")?,
            requirements: normalize_optional(dto.requirements),
            salary: normalize_optional(dto.salary),
            application_deadline: dto.application_deadline,
        };

        validate_deadline(params.application_deadline)?;

        Ok(params)
    }
}

/// Partial update of a posting. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateJobParams {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl UpdateJobParams {
    pub fn from_dto(dto: UpdateJobDto) -> Result<Self, AppError> {
        let params = Self {
            title: dto.title.map(|t| required_text(t, "Title")).transpose()?,
            company: dto.company.map(|c| required_text(c, "Company")).transpose()?,
            location: dto.location.map(|l| l.trim().to_string()),
            job_type: dto
                .job_type
                .map(|t| parse_enum(&t, "job type"))
                .transpose()?,
            description: dto
                .description
                .map(|d| required_text(d, "Description"))
                .transpose()?,
            requirements: dto.requirements.map(|r| r.trim().to_string()),
            salary: dto.salary.map(|s| s.trim().to_string()),
            application_deadline: dto.application_deadline,
            is_active: dto.is_active,
        };

        validate_deadline(params.application_deadline)?;

        Ok(params)
    }
}

/// Listing filters applied to active jobs.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub job_type: Option<JobType>,
    pub location: Option<String>,
    /// Matches title or company.
    pub search: Option<String>,
}

/// Application as seen by the posting user, with the applicant's identity.
#[derive(Debug, Clone, PartialEq)]
pub struct JobApplication {
    pub id: i32,
    pub job_id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn from_entity(
        entity: entity::job_application::Model,
        student: Option<entity::user::Model>,
    ) -> Self {
        let (student_name, student_email) = student
            .map(|u| (u.name, u.email))
            .unwrap_or_default();

        Self {
            id: entity.id,
            job_id: entity.job_id,
            student_id: entity.student_id,
            student_name,
            student_email,
            cover_letter: entity.cover_letter,
            status: entity.status,
            applied_at: entity.applied_at,
        }
    }

    pub fn into_dto(self) -> JobApplicationDto {
        JobApplicationDto {
            id: self.id,
            job_id: self.job_id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            cover_letter: self.cover_letter,
            status: self.status.to_value(),
            applied_at: self.applied_at,
        }
    }
}

/// Application as seen by the applying student, with a summary of the job.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentApplication {
    pub id: i32,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub job_id: i32,
    pub job_title: String,
    pub company: String,
    pub job_type: JobType,
    pub job_is_active: bool,
}

impl StudentApplication {
    pub fn from_entity(
        entity: entity::job_application::Model,
        job: entity::job::Model,
    ) -> Self {
        Self {
            id: entity.id,
            status: entity.status,
            cover_letter: entity.cover_letter,
            applied_at: entity.applied_at,
            job_id: job.id,
            job_title: job.title,
            company: job.company,
            job_type: job.job_type,
            job_is_active: job.is_active,
        }
    }

    pub fn into_dto(self) -> StudentApplicationDto {
        StudentApplicationDto {
            id: self.id,
            status: self.status.to_value(),
            cover_letter: self.cover_letter,
            applied_at: self.applied_at,
            job: JobSummaryDto {
                id: self.job_id,
                title: self.job_title,
                company: self.company,
                job_type: self.job_type.to_value(),
                is_active: self.job_is_active,
            },
        }
    }
}

/// Parses the status a poster may set on an application.
///
/// `applied` is the initial state and cannot be set explicitly.
pub fn parse_review_status(value: &str) -> Result<ApplicationStatus, AppError> {
    match parse_enum::<ApplicationStatus>(value, "status")? {
        ApplicationStatus::Applied => Err(AppError::BadRequest(
            "Status must be one of: reviewed, accepted, rejected".to_string(),
        )),
        status => Ok(status),
    }
}

fn required_text(value: String, field: &str) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value)
}

fn validate_deadline(deadline: Option<DateTime<Utc>>) -> Result<(), AppError> {
    if deadline.is_some_and(|d| d <= Utc::now()) {
        return Err(AppError::BadRequest(
            "Application deadline must be in the future".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_dto() -> CreateJobDto {
        CreateJobDto {
            title: " Backend Engineer ".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            job_type: "internship".to_string(),
            description: "Write services".to_string(),
            requirements: None,
            salary: None,
            application_deadline: None,
        }
    }

    #[test]
    fn parses_job_type_and_trims_title() {
        let params = CreateJobParams::from_dto(1, create_dto()).unwrap();

        assert_eq!(params.title, "Backend Engineer");
        assert_eq!(params.job_type, JobType::Internship);
    }

    #[test]
    fn rejects_unknown_job_type() {
        let dto = CreateJobDto {
            job_type: "volunteer".to_string(),
            ..create_dto()
        };

        assert!(matches!(
            CreateJobParams::from_dto(1, dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_blank_description() {
        let dto = CreateJobDto {
            description: "   ".to_string(),
            ..create_dto()
        };

        assert!(CreateJobParams::from_dto(1, dto).is_err());
    }

    #[test]
    fn rejects_past_deadline() {
        let dto = CreateJobDto {
            application_deadline: Some(Utc::now() - Duration::days(1)),
            ..create_dto()
        };

        assert!(CreateJobParams::from_dto(1, dto).is_err());
    }

    #[test]
    fn review_status_excludes_applied() {
        assert!(parse_review_status("applied").is_err());
        assert_eq!(
            parse_review_status("accepted").unwrap(),
            ApplicationStatus::Accepted
        );
    }
}
