//! Task CRUD endpoints.
//!
//! Reads need any authenticated identity; mutations need the admin role.
//! All routes here sit behind the JWT middleware.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::domain::{AuthenticatedUser, Task, TaskDraft, TaskPatch};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, ok};

use super::service::TaskError;

/// List tasks
///
/// GET /tasks
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All tasks", body = ApiResponse<Vec<Task>>),
        (status = 400, description = "Missing or invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Tasks"
)]
pub async fn get_tasks(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Task>> {
    match state.tasks.list().await {
        Ok(tasks) => ok(tasks),
        Err(err) => {
            tracing::error!("task listing failed: {err}");
            ApiError::from(err).into_err()
        }
    }
}

/// Fetch a single task
///
/// GET /tasks/{id}
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = ApiResponse<Task>),
        (status = 400, description = "Invalid id or no such task"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Tasks"
)]
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Task> {
    match state.tasks.get(&id).await {
        Ok(task) => ok(task),
        Err(err) => ApiError::from(err).into_err(),
    }
}

/// Create a task
///
/// POST /tasks
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = TaskDraft,
    responses(
        (status = 200, description = "Task created", body = ApiResponse<Task>),
        (status = 400, description = "Missing fields"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Tasks"
)]
pub async fn post_task(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthenticatedUser>,
    Json(draft): Json<TaskDraft>,
) -> ApiResult<Task> {
    match state.tasks.create(&actor, draft).await {
        Ok(task) => ok(task),
        Err(err) => {
            match err {
                TaskError::Internal => tracing::error!("task creation failed: {err}"),
                _ => tracing::warn!("task creation rejected: {err}"),
            }
            ApiError::from(err).into_err()
        }
    }
}

/// Partially update a task
///
/// PUT /tasks/{id}; empty fields leave stored values unchanged.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task id")),
    request_body = TaskPatch,
    responses(
        (status = 200, description = "Task updated"),
        (status = 400, description = "Invalid id, no such task, or nothing changed"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Tasks"
)]
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<()> {
    match state.tasks.update(&actor, &id, patch).await {
        Ok(()) => ok(()),
        Err(err) => {
            tracing::warn!(task_id = %id, "task update rejected: {err}");
            ApiError::from(err).into_err()
        }
    }
}

/// Delete a task
///
/// DELETE /tasks/{id}
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 400, description = "Invalid id or no such task"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Tasks"
)]
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    match state.tasks.delete(&actor, &id).await {
        Ok(()) => ok(()),
        Err(err) => {
            tracing::warn!(task_id = %id, "task deletion rejected: {err}");
            ApiError::from(err).into_err()
        }
    }
}
