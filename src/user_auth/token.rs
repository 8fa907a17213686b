//! Signed, time-limited identity assertions.
//!
//! Tokens are HS256 JWTs carrying `email`, `role` and `exp`. The signing
//! secret is loaded once at process startup and never rotated; there is no
//! multi-key support. Verification pins the algorithm, so a token signed
//! with anything but the expected symmetric scheme is rejected outright.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Role;

/// Token validity window from issuance.
pub const TOKEN_VALIDITY_HOURS: i64 = 72;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    /// Expiration as UTC unix seconds.
    pub exp: usize,
}

/// Closed set of verification failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("token signature mismatch")]
    SignatureMismatch,
    #[error("token expired")]
    Expired,
    #[error("token claim missing or invalid")]
    MissingClaim,
    #[error("error while generating token")]
    Signing,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName => TokenError::SignatureMismatch,
            ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => TokenError::MissingClaim,
            _ => TokenError::Malformed,
        }
    }
}

/// Issues and verifies identity tokens with a process-wide symmetric secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validity: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validity: Duration::hours(TOKEN_VALIDITY_HOURS),
        }
    }

    /// Sign a token asserting `email` and `role` for the validity window.
    pub fn issue(&self, email: &str, role: Role) -> Result<String, TokenError> {
        let claims = Claims {
            email: email.to_string(),
            role,
            exp: (Utc::now() + self.validity).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Signing)
    }

    /// Check signature algorithm, signature and expiry, then extract claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }
}
