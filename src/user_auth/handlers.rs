//! Registration, login and promotion endpoints.

use axum::{Extension, Json, extract::Path, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{AuthenticatedUser, Role};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, ok};

use super::service::UserError;

/// Registration request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "user1@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "password123")]
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "user1@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "password123")]
    #[serde(default)]
    pub password: String,
}

/// Created-user summary. The very first registered identity comes back
/// with the admin role.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredUserData {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Login response carrying the signed token.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponseData {
    pub token: String,
    pub email: String,
    pub role: Role,
}

/// Register a new user
///
/// POST /register
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = ApiResponse<RegisteredUserData>),
        (status = 400, description = "Missing fields or email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<RegisteredUserData> {
    match state.users.register(&req.email, &req.password).await {
        Ok(user) => ok(RegisteredUserData {
            user_id: user.id,
            email: user.email,
            role: user.role,
        }),
        Err(err) => {
            tracing::warn!("registration rejected: {err}");
            ApiError::from(err).into_err()
        }
    }
}

/// Login user
///
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponseData>),
        (status = 500, description = "Invalid credentials or internal error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponseData> {
    match state.users.login(&req.email, &req.password).await {
        Ok((token, user)) => ok(AuthResponseData {
            token,
            email: user.email,
            role: user.role,
        }),
        Err(err) => {
            tracing::warn!("login failed: {err}");
            ApiError::from(err).into_err()
        }
    }
}

/// Promote a user to admin
///
/// PUT /promote/{id}
#[utoipa::path(
    put,
    path = "/promote/{id}",
    params(("id" = String, Path, description = "Target user id")),
    responses(
        (status = 200, description = "User promoted to admin"),
        (status = 400, description = "Invalid id, unknown user, or already an admin"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Auth"
)]
pub async fn promote_user(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    match state.users.promote(&actor, &id).await {
        Ok(()) => ok(()),
        Err(err) => {
            match err {
                UserError::Internal => tracing::error!("promotion failed: {err}"),
                _ => tracing::warn!(target_id = %id, "promotion rejected: {err}"),
            }
            ApiError::from(err).into_err()
        }
    }
}
