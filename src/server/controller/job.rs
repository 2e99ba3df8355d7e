use axum::{
    body::Bytes, extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        job::{
            ApplicationListDto, ApplicationResponseDto, ApplyJobDto, CreateJobDto, JobListDto,
            JobResponseDto, StudentApplicationListDto, UpdateApplicationStatusDto, UpdateJobDto,
        },
    },
    server::{
        controller::extract::{optional_json, ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            job::{parse_review_status, CreateJobParams, JobFilter, UpdateJobParams},
            normalize_optional,
            page::PageRequest,
            parse_enum,
        },
        service::job::JobService,
        state::AppState,
    },
};

pub static JOB_TAG: &str = "jobs";

/// Query parameters for the job board.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// List active jobs, newest first, filtered by type, location or a title/company search.
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("jobType" = Option<String>, Query, description = "full-time, part-time, internship or contract"),
        ("location" = Option<String>, Query, description = "Location substring"),
        ("search" = Option<String>, Query, description = "Title or company substring"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of active jobs, newest first", body = JobListDto),
        (status = 400, description = "Unknown job type", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<JobQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let filter = JobFilter {
        job_type: normalize_optional(query.job_type)
            .map(|job_type| parse_enum(&job_type, "job type"))
            .transpose()?,
        location: normalize_optional(query.location),
        search: normalize_optional(query.search),
    };

    let page = JobService::new(&state.db)
        .list_active(filter, PageRequest::new(query.page, query.limit))
        .await?;
    let pagination = page.pagination_dto();

    Ok((
        StatusCode::OK,
        Json(JobListDto {
            success: true,
            jobs: page.items.into_iter().map(|j| j.into_dto()).collect(),
            pagination: Some(pagination),
        }),
    ))
}

/// Get one active job.
#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "The job", body = JobResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Job missing or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(job_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let job = JobService::new(&state.db).get_active(job_id).await?;

    Ok((
        StatusCode::OK,
        Json(JobResponseDto {
            success: true,
            message: None,
            job: job.into_dto(),
        }),
    ))
}

/// Post a new job.
///
/// # Access Control
/// - `Alumni` - Can post jobs
/// - `Admin` - Can post jobs
///
/// # Returns
/// - `201 Created` - Job posted
/// - `400 Bad Request` - Invalid job data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni or admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    security(("bearer" = [])),
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job posted", body = JobResponseDto),
        (status = 400, description = "Invalid job data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    let job = JobService::new(&state.db)
        .create(CreateJobParams::from_dto(user.id, payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JobResponseDto {
            success: true,
            message: Some("Job posted successfully".to_string()),
            job: job.into_dto(),
        }),
    ))
}

/// Update a job posting.
///
/// # Access Control
/// - `Alumni` - The poster only
/// - `Admin` - Any job
///
/// # Returns
/// - `200 OK` - Job updated
/// - `400 Bad Request` - Invalid job data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the poster nor an admin
/// - `404 Not Found` - Job not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/jobs/{job_id}",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID")
    ),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Job updated", body = JobResponseDto),
        (status = 400, description = "Invalid job data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the poster nor an admin", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(job_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    let job = JobService::new(&state.db)
        .update(&user, job_id, UpdateJobParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(JobResponseDto {
            success: true,
            message: Some("Job updated successfully".to_string()),
            job: job.into_dto(),
        }),
    ))
}

/// Deactivate a job posting. Applications are kept.
///
/// # Access Control
/// - `Alumni` - The poster only
/// - `Admin` - Any job
///
/// # Returns
/// - `200 OK` - Job deactivated
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the poster nor an admin
/// - `404 Not Found` - Job not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/jobs/{job_id}",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deactivated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the poster nor an admin", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(job_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    JobService::new(&state.db).deactivate(&user, job_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Job deleted successfully"))))
}

/// List jobs posted by the caller, including inactive ones.
///
/// # Access Control
/// - `Alumni` - Own postings
/// - `Admin` - Own postings
///
/// # Returns
/// - `200 OK` - Jobs posted by the caller, including inactive ones
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an alumni or admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs/mine",
    tag = JOB_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Jobs posted by the caller, including inactive ones", body = JobListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an alumni or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    let jobs = JobService::new(&state.db).get_mine(&user).await?;

    Ok((
        StatusCode::OK,
        Json(JobListDto {
            success: true,
            jobs: jobs.into_iter().map(|j| j.into_dto()).collect(),
            pagination: None,
        }),
    ))
}

/// Apply to an active job before its deadline, with an optional cover letter.
///
/// # Access Control
/// - `Student` - Only students can apply
///
/// # Returns
/// - `201 Created` - Application submitted
/// - `400 Bad Request` - Deadline passed or already applied
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a student
/// - `404 Not Found` - Job missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/jobs/{job_id}/apply",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID")
    ),
    request_body(content = Option<ApplyJobDto>, description = "Optional cover letter"),
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponseDto),
        (status = 400, description = "Deadline passed or already applied", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 404, description = "Job missing or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_to_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(job_id): ApiPath<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Student])
        .await?;

    let payload: ApplyJobDto = optional_json(&body)?;
    let application = JobService::new(&state.db)
        .apply(&student, job_id, normalize_optional(payload.cover_letter))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponseDto {
            success: true,
            message: "Application submitted successfully".to_string(),
            application: application.into_dto(),
        }),
    ))
}

/// List the caller's applications with job details.
///
/// # Access Control
/// - `Student` - Only students
///
/// # Returns
/// - `200 OK` - The caller's applications with job details
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs/applied",
    tag = JOB_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's applications with job details", body = StudentApplicationListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applied_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Student])
        .await?;

    let applications = JobService::new(&state.db).get_applied(&student).await?;

    Ok((
        StatusCode::OK,
        Json(StudentApplicationListDto {
            success: true,
            applications: applications.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// List applicants of a job.
///
/// # Access Control
/// - `Alumni` - The poster only
/// - `Admin` - Any job
///
/// # Returns
/// - `200 OK` - Applicants of the job
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the poster nor an admin
/// - `404 Not Found` - Job not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}/applications",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applicants of the job", body = ApplicationListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the poster nor an admin", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(job_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    let applications = JobService::new(&state.db)
        .get_applications(&user, job_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApplicationListDto {
            success: true,
            applications: applications.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// Mark an application as reviewed, accepted or rejected.
///
/// # Access Control
/// - `Alumni` - The poster of the job only
/// - `Admin` - Any job
///
/// # Returns
/// - `200 OK` - Status updated
/// - `400 Bad Request` - Status is not reviewed, accepted or rejected
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the poster nor an admin
/// - `404 Not Found` - Job or application not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/jobs/{job_id}/applications/{application_id}",
    tag = JOB_TAG,
    security(("bearer" = [])),
    params(
        ("job_id" = i32, Path, description = "Job ID"),
        ("application_id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApplicationResponseDto),
        (status = 400, description = "Status is not reviewed, accepted or rejected", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the poster nor an admin", body = ErrorDto),
        (status = 404, description = "Job or application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath((job_id, application_id)): ApiPath<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[UserRole::Alumni, UserRole::Admin])
        .await?;

    let status = parse_review_status(&payload.status)?;
    let application = JobService::new(&state.db)
        .update_application_status(&user, job_id, application_id, status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApplicationResponseDto {
            success: true,
            message: "Application status updated".to_string(),
            application: application.into_dto(),
        }),
    ))
}
