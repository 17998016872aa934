use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resume Service API",
        version = "1.0.0",
        description = "Backend for the resume/job-tracking application.\n\n**Authentication:** signup and login are public; resume and job endpoints require a JWT Bearer token obtained from login."
    ),
    paths(
        crate::api::auth::signup,
        crate::api::auth::login,
        crate::api::auth::get_me,

        crate::api::resumes::get_master_resume,
        crate::api::resumes::save_master_resume,

        crate::api::jobs::list_analyses,
        crate::api::jobs::create_analysis,
        crate::api::jobs::delete_analysis,

        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::services::auth_service::SignupRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::SignupResponse,
            crate::services::auth_service::AuthResponse,
            crate::services::resume_service::SaveResumeRequest,
            crate::services::job_service::CreateAnalysisRequest,

            crate::models::UserInfo,
            crate::models::MasterResumeView,
            crate::models::WorkExperience,
            crate::models::Education,
            crate::models::JobAnalysisView,
            crate::models::MessageResponse,

            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Signup, login and identity endpoints."),
        (name = "Resumes", description = "Master resume storage: one document per user, replaced wholesale on save."),
        (name = "Jobs", description = "Job analysis records: list, create and delete, always scoped to the authenticated user."),
        (name = "Health", description = "Health check (including store connectivity) and request metrics.")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter the JWT returned by /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
