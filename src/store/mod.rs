//! Storage collaborator contracts.
//!
//! The document store is opaque to the core: find-one, find-many, insert,
//! update-by-id and delete-by-id, with matched-count / modified-count
//! feedback on conditional writes. Compound invariants (bootstrap admin,
//! one-directional promotion) are enforced *inside* the store with atomic
//! conditional operations, because request handlers run concurrently and
//! hold no locks of their own.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Task, TaskDraft, TaskPatch, User};

pub use memory::{MemoryTaskStore, MemoryUserStore};

/// Failures surfaced by a store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Unique-email constraint violated on insert.
    #[error("user email already in use")]
    DuplicateEmail,
    /// Backend failure (connection, decode, ...). The in-memory store never
    /// produces this; a remote document store would.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Matched/modified feedback from a conditional update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    pub matched: u64,
    pub modified: u64,
}

/// Deleted-count feedback from a delete-by-id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: u64,
}

/// Identity collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new identity with a store-assigned id.
    ///
    /// The role is resolved here, atomically with the duplicate check: the
    /// first identity ever inserted becomes the bootstrap administrator,
    /// every later one a plain user. Two concurrent first registrations can
    /// therefore never both claim admin.
    async fn create(&self, email: String, password_hash: String) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Conditionally set the role to admin.
    ///
    /// `matched == 0` means no such id; `matched == 1, modified == 0` means
    /// the target already is an admin. The three-way distinction is part of
    /// the contract.
    async fn promote(&self, id: Uuid) -> Result<UpdateReport, StoreError>;
}

/// Task collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert with a store-assigned id; returns the stored record.
    async fn insert(&self, draft: TaskDraft) -> Result<Task, StoreError>;

    async fn find_all(&self) -> Result<Vec<Task>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, StoreError>;

    /// Apply the non-empty fields of `patch`. A field set to its current
    /// value does not count as modified, mirroring document-store
    /// modified-count semantics.
    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<UpdateReport, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<DeleteReport, StoreError>;
}
