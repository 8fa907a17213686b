//! Field-completeness rules and role gates for task mutations.
//!
//! Reads require only an authenticated identity; every mutation requires
//! the admin role, checked before the store is touched.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{AuthenticatedUser, Role, Task, TaskDraft, TaskPatch};
use crate::store::{StoreError, TaskStore};

/// Closed set of task-flow failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("you are not authorized to modify tasks")]
    Forbidden,
    #[error("invalid task id")]
    InvalidId,
    #[error("there is no task with the specified id")]
    NotFound,
    #[error("update did not change any field")]
    NoEffectiveChange,
    #[error("internal server error")]
    Internal,
}

impl From<StoreError> for TaskError {
    fn from(err: StoreError) -> Self {
        tracing::error!("task store failure: {err}");
        TaskError::Internal
    }
}

pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Task, TaskError> {
        let id = Uuid::parse_str(id).map_err(|_| TaskError::InvalidId)?;
        self.store.find_by_id(id).await?.ok_or(TaskError::NotFound)
    }

    /// Create a task. Title, description and status must be non-empty after
    /// trimming; the store assigns the id.
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        draft: TaskDraft,
    ) -> Result<Task, TaskError> {
        require_admin(actor)?;

        let draft = TaskDraft {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            status: draft.status.trim().to_string(),
            due_date: draft.due_date,
        };
        if draft.title.is_empty() || draft.description.is_empty() || draft.status.is_empty() {
            return Err(TaskError::MissingFields);
        }

        let task = self.store.insert(draft).await?;
        tracing::info!(id = %task.id, created_by = %actor.email, "task created");
        Ok(task)
    }

    /// Apply a partial update. Empty fields leave the stored value alone; a
    /// matched update that changes nothing is reported as
    /// [`TaskError::NoEffectiveChange`], not success.
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        patch: TaskPatch,
    ) -> Result<(), TaskError> {
        require_admin(actor)?;

        let id = Uuid::parse_str(id).map_err(|_| TaskError::InvalidId)?;
        let report = self.store.update(id, patch).await?;
        if report.matched == 0 {
            return Err(TaskError::NotFound);
        }
        if report.modified == 0 {
            return Err(TaskError::NoEffectiveChange);
        }
        tracing::info!(%id, updated_by = %actor.email, "task updated");
        Ok(())
    }

    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), TaskError> {
        require_admin(actor)?;

        let id = Uuid::parse_str(id).map_err(|_| TaskError::InvalidId)?;
        let report = self.store.delete(id).await?;
        if report.deleted == 0 {
            return Err(TaskError::NotFound);
        }
        tracing::info!(%id, deleted_by = %actor.email, "task deleted");
        Ok(())
    }
}

fn require_admin(actor: &AuthenticatedUser) -> Result<(), TaskError> {
    if actor.role != Role::Admin {
        return Err(TaskError::Forbidden);
    }
    Ok(())
}
