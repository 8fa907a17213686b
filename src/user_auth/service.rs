//! Registration, login and promotion flows.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{AuthenticatedUser, Role, User};
use crate::store::{StoreError, UserStore};

use super::credentials;
use super::token::TokenService;

/// Closed set of user-flow failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("required field missing")]
    MissingFields,
    #[error("user email already in use")]
    DuplicateEmail,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("you are not authorized to promote another user")]
    Forbidden,
    #[error("invalid user ID")]
    InvalidId,
    #[error("no user with the specified id found")]
    NotFound,
    #[error("user is already an admin")]
    AlreadyAdmin,
    #[error("internal server error")]
    Internal,
}

pub struct UserService {
    store: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Register a new identity.
    ///
    /// The store resolves the role atomically: the first identity ever
    /// inserted becomes the bootstrap administrator. Passwords are hashed
    /// before they reach the store; plaintext is never persisted.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, UserError> {
        if email.is_empty() || password.is_empty() {
            return Err(UserError::MissingFields);
        }

        let password_hash = credentials::hash_password(password).map_err(|err| {
            tracing::error!("password hashing failed: {err}");
            UserError::Internal
        })?;

        match self.store.create(email.to_string(), password_hash).await {
            Ok(user) => {
                tracing::info!(email = %user.email, role = %user.role, "user registered");
                Ok(user)
            }
            Err(StoreError::DuplicateEmail) => Err(UserError::DuplicateEmail),
            Err(StoreError::Backend(err)) => {
                tracing::error!("user insert failed: {err}");
                Err(UserError::Internal)
            }
        }
    }

    /// Authenticate a returning identity and issue a token.
    ///
    /// Unknown email and wrong password yield the identical outcome so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), UserError> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(UserError::MissingFields);
        }

        let user = self
            .store
            .find_by_email(email)
            .await
            .map_err(|err| {
                tracing::error!("user lookup failed: {err}");
                UserError::Internal
            })?
            .ok_or(UserError::InvalidCredentials)?;

        credentials::verify_password(&user.password_hash, password)
            .map_err(|_| UserError::InvalidCredentials)?;

        let token = self.tokens.issue(&user.email, user.role).map_err(|err| {
            tracing::error!("token signing failed: {err}");
            UserError::Internal
        })?;

        Ok((token, user))
    }

    /// Promote the target identity to admin.
    ///
    /// Only admins may promote. The store reports matched/modified counts
    /// and the three-way outcome is preserved exactly: not-found,
    /// already-admin and success are observably distinct.
    pub async fn promote(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), UserError> {
        if actor.role != Role::Admin {
            return Err(UserError::Forbidden);
        }

        let id = Uuid::parse_str(id).map_err(|_| UserError::InvalidId)?;
        let report = self.store.promote(id).await.map_err(|err| {
            tracing::error!("promotion update failed: {err}");
            UserError::Internal
        })?;

        if report.matched == 0 {
            return Err(UserError::NotFound);
        }
        if report.modified == 0 {
            return Err(UserError::AlreadyAdmin);
        }
        tracing::info!(%id, promoted_by = %actor.email, "user promoted to admin");
        Ok(())
    }
}
