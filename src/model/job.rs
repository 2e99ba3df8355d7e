use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// One of `full-time`, `part-time`, `internship`, `contract`.
    pub job_type: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
}

/// Partial update of a job posting. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub posted_by: i32,
    pub posted_by_name: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub application_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct JobResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub job: JobDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct JobListDto {
    pub success: bool,
    pub jobs: Vec<JobDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyJobDto {
    pub cover_letter: Option<String>,
}

/// An application as seen by the job's poster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub cover_letter: Option<String>,
    /// One of `applied`, `reviewed`, `accepted`, `rejected`.
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobSummaryDto {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub job_type: String,
    pub is_active: bool,
}

/// An application as seen by the applying student.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentApplicationDto {
    pub id: i32,
    pub status: String,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub job: JobSummaryDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApplicationResponseDto {
    pub success: bool,
    pub message: String,
    pub application: JobApplicationDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApplicationListDto {
    pub success: bool,
    pub applications: Vec<JobApplicationDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct StudentApplicationListDto {
    pub success: bool,
    pub applications: Vec<StudentApplicationDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateApplicationStatusDto {
    /// One of `reviewed`, `accepted`, `rejected`.
    pub status: String,
}
