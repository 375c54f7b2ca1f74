//! Port for the persisted identity store.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, UserId, UserSummary};

/// Persisted users: registration and credential verification.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Store a new user, persisting only a one-way digest of the password.
    ///
    /// # Errors
    /// [`crate::domain::ErrorCode::DuplicateIdentity`] when the username or
    /// email is already taken.
    async fn register(&self, registration: &Registration) -> Result<UserId, Error>;

    /// Verify credentials against the stored digest and return a non-secret
    /// summary. No session artifact is minted.
    ///
    /// # Errors
    /// [`crate::domain::ErrorCode::NotFound`] for an unknown email;
    /// [`crate::domain::ErrorCode::InvalidCredentials`] when the digest does
    /// not verify.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserSummary, Error>;
}
