//! Core domain types shared across the service layers.
//!
//! Records are owned by the store; everything here is held transiently for
//! the duration of a single request.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Access role attached to every identity.
///
/// The very first identity registered into an empty store becomes `Admin`;
/// everyone after that starts as `User` and can only be promoted, never
/// demoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A stored identity. The password is kept only as a salted one-way hash,
/// so this type never derives `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Identity reconstructed per-request from verified token claims.
///
/// Built by the authorization middleware and injected into the request
/// extensions as a typed value; it exists only for the lifetime of one
/// request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub role: Role,
}

/// A task record as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: Uuid,
    #[schema(example = "Ship release 1.2")]
    pub title: String,
    #[schema(example = "Cut the branch, run the checklist, tag.")]
    pub description: String,
    pub due_date: DateTime<Utc>,
    #[schema(example = "pending")]
    pub status: String,
}

/// Client-supplied task body for creation. The id is always assigned by the
/// store, never taken from the client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
}

/// Partial update body. An empty field means "leave unchanged", not "clear".
/// Due dates are not updatable.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl TaskPatch {
    /// True when no field would overwrite anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.status.is_empty()
    }
}
