//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by a
//! single SQLite database file through Diesel with an r2d2 pool. Diesel's
//! SQLite driver is synchronous, so each adapter dispatches its query work
//! to the Tokio blocking pool and never blocks an actix worker.

mod diesel_catalog_store;
mod diesel_identity_store;
mod diesel_order_ledger;
mod error_mapping;
mod models;
mod pool;
pub mod schema;

pub use diesel_catalog_store::DieselCatalogStore;
pub use diesel_identity_store::DieselIdentityStore;
pub use diesel_order_ledger::DieselOrderLedger;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};

use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::domain::Error;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Bring the database file up to the current schema.
///
/// # Errors
/// Returns an internal [`Error`] when a connection cannot be checked out or
/// a migration cannot be applied.
pub fn run_pending_migrations(pool: &DbPool) -> Result<(), Error> {
    let mut conn = pool.get().map_err(|err| Error::internal(err.to_string()))?;
    let conn: &mut SqliteConnection = &mut conn;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| Error::internal(format!("failed to run migrations: {err}")))
}
