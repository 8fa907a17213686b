//! Taskgate - Role-gated task management service
//!
//! A layered CRUD web service: JWT authentication, role-based authorization
//! (user vs admin), and a collection of task records behind an opaque
//! document store.
//!
//! # Modules
//!
//! - [`domain`] - Core types (User, Role, Task, AuthenticatedUser)
//! - [`store`] - Storage collaborator traits and the in-memory backend
//! - [`user_auth`] - Credentials, tokens, middleware, user flows
//! - [`tasks`] - Task validation and mutation flows
//! - [`gateway`] - HTTP routing, response envelope, server startup
//! - [`config`] - Per-environment YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod domain;
pub mod gateway;
pub mod logging;
pub mod store;
pub mod tasks;
pub mod user_auth;

// Convenient re-exports at crate root
pub use domain::{AuthenticatedUser, Role, Task, TaskDraft, TaskPatch, User};
pub use store::{MemoryTaskStore, MemoryUserStore, StoreError, TaskStore, UserStore};
pub use tasks::{TaskError, TaskService};
pub use user_auth::{AuthError, TokenError, TokenService, UserError, UserService};
