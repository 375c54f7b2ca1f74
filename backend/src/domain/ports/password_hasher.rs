//! Opaque slow-hash capability used by the identity store.

use async_trait::async_trait;

use crate::domain::Error;

/// One-way password digest operations.
///
/// Implementations are deliberately computationally expensive; callers must
/// not invoke them while holding a storage connection.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a one-way digest of `password`.
    async fn hash(&self, password: &str) -> Result<String, Error>;

    /// Check `password` against a stored digest.
    async fn verify(&self, password: &str, digest: &str) -> Result<bool, Error>;
}
