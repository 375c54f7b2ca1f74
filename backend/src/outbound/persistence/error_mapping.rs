//! Shared Diesel error mapping for the persistence adapters.

use tracing::debug;

use crate::domain::Error;

use super::pool::PoolError;

/// Map pool checkout/build failures to an internal domain error.
pub(crate) fn map_pool_error(error: PoolError) -> Error {
    Error::internal(error.to_string())
}

/// True when the error is a violated UNIQUE constraint.
pub(crate) fn is_unique_violation(error: &diesel::result::Error) -> bool {
    matches!(
        error,
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _
        )
    )
}

/// Map query failures outside the placement transaction. The cause is kept
/// in the log, not in the client-facing message.
pub(crate) fn map_query_error(error: diesel::result::Error) -> Error {
    debug!(error = %error, "diesel operation failed");
    Error::internal("database error")
}

/// Map a panicked or cancelled blocking task.
pub(crate) fn map_join_error(error: tokio::task::JoinError) -> Error {
    Error::internal(format!("blocking task failed: {error}"))
}
