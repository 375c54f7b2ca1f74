//! Password hashing adapter backed by bcrypt.

use async_trait::async_trait;
use tokio::task;

use crate::domain::ports::PasswordHasher;
use crate::domain::Error;

/// Bcrypt-backed implementation of the password hashing port.
///
/// Hashing and verification are CPU-bound by design, so both run on the
/// Tokio blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit bcrypt cost factor.
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

fn map_bcrypt_error(error: bcrypt::BcryptError) -> Error {
    Error::internal(format!("password digest failure: {error}"))
}

fn map_join_error(error: task::JoinError) -> Error {
    Error::internal(format!("blocking task failed: {error}"))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, Error> {
        let cost = self.cost;
        let password = password.to_owned();
        task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(map_join_error)?
            .map_err(map_bcrypt_error)
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, Error> {
        let password = password.to_owned();
        let digest = digest.to_owned();
        task::spawn_blocking(move || bcrypt::verify(password, &digest))
            .await
            .map_err(map_join_error)?
            .map_err(map_bcrypt_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The minimum cost keeps digest work fast in tests.
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4)
    }

    #[tokio::test]
    async fn digest_round_trips() {
        let h = hasher();
        let digest = h.hash("pw123").await.expect("hash succeeds");
        assert!(h.verify("pw123", &digest).await.expect("verify succeeds"));
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        let h = hasher();
        let digest = h.hash("pw123").await.expect("hash succeeds");
        assert!(!h.verify("pw124", &digest).await.expect("verify succeeds"));
    }

    #[tokio::test]
    async fn digest_is_not_the_plaintext() {
        let digest = hasher().hash("pw123").await.expect("hash succeeds");
        assert_ne!(digest, "pw123");
        assert!(digest.starts_with("$2"));
    }
}
