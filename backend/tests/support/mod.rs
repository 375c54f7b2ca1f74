//! Shared fixtures for integration tests: a migrated temporary SQLite
//! database plus row-level helpers for seeding and counting.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use diesel::prelude::*;
use tempfile::TempDir;

use storefront_backend::domain::ports::PasswordHasher;
use storefront_backend::outbound::persistence::{self, schema, DbPool, PoolConfig};
use storefront_backend::outbound::security::BcryptPasswordHasher;

/// Bcrypt cost used by tests; the minimum keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// A migrated SQLite database living in a temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create a fresh database file and bring it up to the current schema.
pub fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.db");
    let pool = DbPool::new(PoolConfig::new(path.to_string_lossy())).expect("build pool");
    persistence::run_pending_migrations(&pool).expect("run migrations");
    TestDb { pool, _dir: dir }
}

/// Hasher wired at the cheap test cost.
pub fn test_hasher() -> Arc<dyn PasswordHasher> {
    Arc::new(BcryptPasswordHasher::new(TEST_BCRYPT_COST))
}

/// Insert a product row directly and return its id.
pub fn seed_product(pool: &DbPool, name: &str, price: f64) -> i32 {
    let mut conn = pool.get().expect("connection");
    diesel::insert_into(schema::products::table)
        .values((
            schema::products::name.eq(name),
            schema::products::description.eq("seeded for tests"),
            schema::products::price.eq(price),
        ))
        .returning(schema::products::id)
        .get_result(&mut conn)
        .expect("insert product")
}

/// Insert a user row directly (digest is irrelevant) and return its id.
pub fn seed_user(pool: &DbPool, username: &str, email: &str) -> i32 {
    let mut conn = pool.get().expect("connection");
    diesel::insert_into(schema::users::table)
        .values((
            schema::users::username.eq(username),
            schema::users::email.eq(email),
            schema::users::password.eq("$2b$04$not-a-real-digest"),
        ))
        .returning(schema::users::id)
        .get_result(&mut conn)
        .expect("insert user")
}

/// Total number of order rows in the database.
pub fn order_row_count(pool: &DbPool) -> i64 {
    let mut conn = pool.get().expect("connection");
    schema::orders::table
        .count()
        .get_result(&mut conn)
        .expect("count orders")
}

/// Total number of order item rows in the database.
pub fn order_item_row_count(pool: &DbPool) -> i64 {
    let mut conn = pool.get().expect("connection");
    schema::order_items::table
        .count()
        .get_result(&mut conn)
        .expect("count order items")
}

/// Number of item rows belonging to one order.
pub fn items_for_order(pool: &DbPool, order_id: i32) -> i64 {
    let mut conn = pool.get().expect("connection");
    schema::order_items::table
        .filter(schema::order_items::order_id.eq(order_id))
        .count()
        .get_result(&mut conn)
        .expect("count items for order")
}

/// Stored password column for a user, for asserting digests.
pub fn stored_password(pool: &DbPool, email: &str) -> String {
    let mut conn = pool.get().expect("connection");
    schema::users::table
        .filter(schema::users::email.eq(email))
        .select(schema::users::password)
        .first(&mut conn)
        .expect("stored password")
}
