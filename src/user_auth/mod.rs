//! User authentication and authorization.
//!
//! ## Components
//! - `credentials`: salted argon2 password hashing and verification
//! - `token`: HS256 JWT issue/verify with pinned algorithm
//! - `error`: middleware rejection states
//! - `middleware`: Axum layer that gates every protected route
//! - `service`: registration, login and promotion flows
//! - `handlers`: HTTP endpoints for the above

pub mod credentials;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod service;
pub mod token;

// Re-export for convenience
pub use credentials::{CredentialError, hash_password, verify_password};
pub use error::AuthError;
pub use middleware::{jwt_auth_middleware, parse_bearer};
pub use service::{UserError, UserService};
pub use token::{Claims, TOKEN_VALIDITY_HOURS, TokenError, TokenService};
