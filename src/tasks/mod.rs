//! Task validation and mutation flows.

pub mod handlers;
pub mod service;

pub use service::{TaskError, TaskService};
