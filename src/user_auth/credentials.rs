//! Password hashing and verification.
//!
//! Salted one-way argon2 hashes in PHC string format. Verification reports
//! nothing beyond match / no-match: an undecodable stored hash is
//! indistinguishable from a wrong password.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("error while hashing password")]
    Hash,
    #[error("passwords don't match")]
    Mismatch,
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| CredentialError::Hash)
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(stored: &str, plain: &str) -> Result<(), CredentialError> {
    let parsed = PasswordHash::new(stored).map_err(|_| CredentialError::Mismatch)?;
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .map_err(|_| CredentialError::Mismatch)
}
