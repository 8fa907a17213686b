//! Authorization middleware for Axum.
//!
//! Every protected request passes a four-state machine: no header, header
//! not in `Bearer <token>` shape, token rejected by the token service, or
//! authorized. On success a typed [`AuthenticatedUser`] is injected into
//! the request extensions for handlers to extract; on any failure the
//! request is aborted before a handler runs.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::domain::AuthenticatedUser;
use crate::gateway::state::AppState;

use super::error::AuthError;

/// Extract the token from an `Authorization` header value.
///
/// The header must be exactly two space-separated parts with a
/// case-insensitive `bearer` scheme; anything else is malformed.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingCredentials)?;
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || !parts[0].eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedCredentials);
    }
    Ok(parts[1])
}

pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = parse_bearer(header)?;
    let claims = state.tokens.verify(token).map_err(AuthError::from)?;

    request.extensions_mut().insert(AuthenticatedUser {
        email: claims.email,
        role: claims.role,
    });
    Ok(next.run(request).await)
}
