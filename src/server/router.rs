use axum::{
    routing::{get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{achievement, admin, alumni, auth, donation, event, health, job, mentorship},
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/password", put(auth::change_password))
        .route(
            "/api/alumni/me",
            get(alumni::get_my_profile).put(alumni::upsert_my_profile),
        )
        .route("/api/alumni", get(alumni::list_alumni))
        .route("/api/alumni/{user_id}", get(alumni::get_alumni))
        .route(
            "/api/admin/me",
            get(admin::get_my_profile).put(admin::update_my_profile),
        )
        .route("/api/admin/users", get(admin::list_users))
        .route(
            "/api/admin/users/{id}/status",
            patch(admin::update_user_status),
        )
        .route("/api/admin/stats", get(admin::get_stats))
        .route("/api/jobs", get(job::list_jobs).post(job::create_job))
        .route("/api/jobs/mine", get(job::get_my_jobs))
        .route("/api/jobs/applied", get(job::get_applied_jobs))
        .route(
            "/api/jobs/{job_id}",
            get(job::get_job).put(job::update_job).delete(job::delete_job),
        )
        .route("/api/jobs/{job_id}/apply", post(job::apply_to_job))
        .route(
            "/api/jobs/{job_id}/applications",
            get(job::get_job_applications),
        )
        .route(
            "/api/jobs/{job_id}/applications/{application_id}",
            patch(job::update_application_status),
        )
        .route(
            "/api/achievements",
            get(achievement::list_achievements).post(achievement::create_achievement),
        )
        .route(
            "/api/achievements/mine",
            get(achievement::get_my_achievements),
        )
        .route(
            "/api/achievements/{id}",
            put(achievement::update_achievement).delete(achievement::delete_achievement),
        )
        .route("/api/donations", get(donation::get_all_donations))
        .route("/api/donations/donate", post(donation::donate))
        .route("/api/donations/mine", get(donation::get_my_donations))
        .route("/api/mentorships", post(mentorship::request_mentorship))
        .route("/api/mentorships/mine", get(mentorship::get_my_mentorships))
        .route(
            "/api/mentorships/{id}/status",
            patch(mentorship::update_mentorship_status),
        )
        .route(
            "/api/events",
            get(event::list_events).post(event::create_event),
        )
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/events/{id}/register",
            post(event::register_for_event).delete(event::cancel_event_registration),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
