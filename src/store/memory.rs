//! In-memory document store.
//!
//! Backs the service in tests and single-node deployments. The user
//! collection sits behind one `RwLock` so the bootstrap-role decision, the
//! duplicate-email check and the insert commit as a single atomic section;
//! tasks use per-entry locking since no task operation spans entries.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use dashmap::DashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Role, Task, TaskDraft, TaskPatch, User};

use super::{DeleteReport, StoreError, TaskStore, UpdateReport, UserStore};

/// Identity collection keyed by id.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, email: String, password_hash: String) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let role = if users.is_empty() {
            Role::Admin
        } else {
            Role::User
        };
        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn promote(&self, id: Uuid) -> Result<UpdateReport, StoreError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            None => Ok(UpdateReport {
                matched: 0,
                modified: 0,
            }),
            Some(user) if user.role == Role::Admin => Ok(UpdateReport {
                matched: 1,
                modified: 0,
            }),
            Some(user) => {
                user.role = Role::Admin;
                Ok(UpdateReport {
                    matched: 1,
                    modified: 1,
                })
            }
        }
    }
}

/// Task collection keyed by id.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: DashMap<Uuid, Task>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let task = Task {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date.unwrap_or(DateTime::UNIX_EPOCH),
            status: draft.status,
        };
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_all(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<UpdateReport, StoreError> {
        match self.tasks.get_mut(&id) {
            None => Ok(UpdateReport {
                matched: 0,
                modified: 0,
            }),
            Some(mut entry) => {
                let task = entry.value_mut();
                let mut modified = 0;
                if !patch.title.is_empty() && task.title != patch.title {
                    task.title = patch.title;
                    modified = 1;
                }
                if !patch.description.is_empty() && task.description != patch.description {
                    task.description = patch.description;
                    modified = 1;
                }
                if !patch.status.is_empty() && task.status != patch.status {
                    task.status = patch.status;
                    modified = 1;
                }
                Ok(UpdateReport {
                    matched: 1,
                    modified,
                })
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteReport, StoreError> {
        let deleted = if self.tasks.remove(&id).is_some() { 1 } else { 0 };
        Ok(DeleteReport { deleted })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn draft(title: &str, status: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "something to do".to_string(),
            due_date: Some(Utc::now()),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn first_user_becomes_admin_then_user() {
        let store = MemoryUserStore::new();
        let first = store
            .create("a@x.com".to_string(), "hash-a".to_string())
            .await
            .unwrap();
        assert_eq!(first.role, Role::Admin);

        let second = store
            .create("b@x.com".to_string(), "hash-b".to_string())
            .await
            .unwrap();
        assert_eq!(second.role, Role::User);
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        store
            .create("a@x.com".to_string(), "hash".to_string())
            .await
            .unwrap();
        let err = store
            .create("a@x.com".to_string(), "other".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
    }

    #[tokio::test]
    async fn promote_reports_three_way_outcome() {
        let store = MemoryUserStore::new();
        let admin = store
            .create("a@x.com".to_string(), "hash".to_string())
            .await
            .unwrap();
        let user = store
            .create("b@x.com".to_string(), "hash".to_string())
            .await
            .unwrap();

        // Unknown id: matched 0.
        let report = store.promote(Uuid::new_v4()).await.unwrap();
        assert_eq!(report.matched, 0);

        // Fresh promotion: matched and modified.
        let report = store.promote(user.id).await.unwrap();
        assert_eq!((report.matched, report.modified), (1, 1));

        // Repeat promotion: matched but unmodified.
        let report = store.promote(user.id).await.unwrap();
        assert_eq!((report.matched, report.modified), (1, 0));

        // Bootstrap admin was already admin.
        let report = store.promote(admin.id).await.unwrap();
        assert_eq!((report.matched, report.modified), (1, 0));
    }

    #[tokio::test]
    async fn insert_assigns_id_and_keeps_fields() {
        let store = MemoryTaskStore::new();
        let task = store.insert(draft("write docs", "pending")).await.unwrap();
        assert_eq!(task.title, "write docs");
        assert_eq!(task.status, "pending");

        let found = store.find_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(found, task);
    }

    #[tokio::test]
    async fn update_applies_only_non_empty_fields() {
        let store = MemoryTaskStore::new();
        let task = store.insert(draft("write docs", "pending")).await.unwrap();

        let patch = TaskPatch {
            status: "done".to_string(),
            ..TaskPatch::default()
        };
        let report = store.update(task.id, patch).await.unwrap();
        assert_eq!((report.matched, report.modified), (1, 1));

        let stored = store.find_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(stored.status, "done");
        assert_eq!(stored.title, "write docs");
        assert_eq!(stored.description, "something to do");
    }

    #[tokio::test]
    async fn update_with_same_values_modifies_nothing() {
        let store = MemoryTaskStore::new();
        let task = store.insert(draft("write docs", "pending")).await.unwrap();

        let patch = TaskPatch {
            status: "pending".to_string(),
            ..TaskPatch::default()
        };
        let report = store.update(task.id, patch).await.unwrap();
        assert_eq!((report.matched, report.modified), (1, 0));
    }

    #[tokio::test]
    async fn update_unknown_id_matches_nothing() {
        let store = MemoryTaskStore::new();
        let report = store
            .update(Uuid::new_v4(), TaskPatch::default())
            .await
            .unwrap();
        assert_eq!((report.matched, report.modified), (0, 0));
    }

    #[tokio::test]
    async fn delete_reports_count() {
        let store = MemoryTaskStore::new();
        let task = store.insert(draft("write docs", "pending")).await.unwrap();

        assert_eq!(store.delete(task.id).await.unwrap().deleted, 1);
        assert_eq!(store.delete(task.id).await.unwrap().deleted, 0);
        assert!(store.find_by_id(task.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_due_date_defaults_to_epoch() {
        let store = MemoryTaskStore::new();
        let mut d = draft("write docs", "pending");
        d.due_date = None;
        let task = store.insert(d).await.unwrap();
        assert_eq!(task.due_date, DateTime::UNIX_EPOCH);
    }
}
