//! OpenAPI document served under `/api/docs`.
//!
//! Every handler registers itself here through its `#[utoipa::path]` attribute. Protected
//! endpoints reference the `bearer` scheme added by [`SecurityAddon`].

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto, PaginationDto},
        user::UserDto,
    },
    server::controller::{
        achievement::{self, ACHIEVEMENT_TAG},
        admin::{self, ADMIN_TAG},
        alumni::{self, ALUMNI_TAG},
        auth::{self, AUTH_TAG},
        donation::{self, DONATION_TAG},
        event::{self, EVENT_TAG},
        health::{self, HEALTH_TAG},
        job::{self, JOB_TAG},
        mentorship::{self, MENTORSHIP_TAG},
    },
};

/// Adds the JWT bearer scheme to the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Token returned by POST /api/auth/register or POST /api/auth/login.",
                    ))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Alumni Connect API",
        description = "REST backend connecting students, alumni and administrators."
    ),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::me,
        auth::change_password,
        alumni::get_my_profile,
        alumni::upsert_my_profile,
        alumni::list_alumni,
        alumni::get_alumni,
        admin::get_my_profile,
        admin::update_my_profile,
        admin::list_users,
        admin::update_user_status,
        admin::get_stats,
        job::list_jobs,
        job::get_job,
        job::create_job,
        job::update_job,
        job::delete_job,
        job::get_my_jobs,
        job::apply_to_job,
        job::get_applied_jobs,
        job::get_job_applications,
        job::update_application_status,
        achievement::create_achievement,
        achievement::list_achievements,
        achievement::get_my_achievements,
        achievement::update_achievement,
        achievement::delete_achievement,
        donation::donate,
        donation::get_my_donations,
        donation::get_all_donations,
        mentorship::request_mentorship,
        mentorship::get_my_mentorships,
        mentorship::update_mentorship_status,
        event::list_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::delete_event,
        event::register_for_event,
        event::cancel_event_registration,
    ),
    components(schemas(ErrorDto, MessageDto, HealthDto, PaginationDto, UserDto)),
    tags(
        (name = HEALTH_TAG, description = "Liveness check"),
        (name = AUTH_TAG, description = "Registration, login and password management"),
        (name = ALUMNI_TAG, description = "Alumni profiles and directory"),
        (name = ADMIN_TAG, description = "Administration and dashboard statistics"),
        (name = JOB_TAG, description = "Job board and applications"),
        (name = ACHIEVEMENT_TAG, description = "Alumni achievements"),
        (name = DONATION_TAG, description = "Donations"),
        (name = MENTORSHIP_TAG, description = "Mentorship requests"),
        (name = EVENT_TAG, description = "Events and registrations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer"));
    }

    #[test]
    fn documents_every_resource() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/health",
            "/api/auth/register",
            "/api/alumni/{user_id}",
            "/api/admin/users/{id}/status",
            "/api/jobs/{job_id}/applications/{application_id}",
            "/api/achievements/mine",
            "/api/donations/donate",
            "/api/mentorships/{id}/status",
            "/api/events/{id}/register",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
