//! Authorization middleware error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::types::{ApiResponse, error_codes};

use super::token::TokenError;

/// Closed set of middleware rejection states. Every variant maps to a 400:
/// the original surface deliberately reports credential problems as bad
/// requests, not 401s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authorization header not found")]
    MissingCredentials,
    #[error("bearer token not found")]
    MalformedCredentials,
    #[error("invalid token")]
    InvalidToken(#[from] TokenError),
}

impl AuthError {
    /// Stable numeric code for the response envelope.
    pub fn code(&self) -> i32 {
        match self {
            AuthError::MissingCredentials => error_codes::MISSING_AUTH,
            AuthError::MalformedCredentials => error_codes::MALFORMED_AUTH,
            AuthError::InvalidToken(_) => error_codes::AUTH_FAILED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code(), self.to_string());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        assert_eq!(AuthError::MissingCredentials.code(), 2001);
        assert_eq!(AuthError::MalformedCredentials.code(), 2002);
        assert_eq!(AuthError::InvalidToken(TokenError::Expired).code(), 2003);
    }

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "authorization header not found"
        );
        assert_eq!(
            AuthError::MalformedCredentials.to_string(),
            "bearer token not found"
        );
        assert_eq!(
            AuthError::InvalidToken(TokenError::Expired).to_string(),
            "invalid token"
        );
    }
}
