//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Role, Task, TaskDraft, TaskPatch};
use crate::gateway::handlers::HealthResponse;
use crate::user_auth::handlers::{
    AuthResponseData, LoginRequest, RegisterRequest, RegisteredUserData,
};

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "HMAC-signed JWT carrying email, role and exp; valid 72h from issue.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskgate API",
        version = "1.0.0",
        description = "Role-gated task management service. Register, log in, and manage tasks; the first registered user becomes the administrator.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        crate::user_auth::handlers::promote_user,
        crate::tasks::handlers::get_tasks,
        crate::tasks::handlers::get_task,
        crate::tasks::handlers::post_task,
        crate::tasks::handlers::update_task,
        crate::tasks::handlers::delete_task,
    ),
    components(schemas(
        HealthResponse,
        RegisterRequest,
        LoginRequest,
        RegisteredUserData,
        AuthResponseData,
        Role,
        Task,
        TaskDraft,
        TaskPatch,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Service health"),
        (name = "Auth", description = "Registration, login and role escalation"),
        (name = "Tasks", description = "Task management (reads: any authenticated user; writes: admin)"),
    )
)]
pub struct ApiDoc;
