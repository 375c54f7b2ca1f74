//! SQLite-backed `IdentityStore` implementation using Diesel.
//!
//! The slow digest work never runs while a pooled connection is held:
//! `register` hashes before touching storage, and `authenticate` verifies
//! only after the user row has been fetched and the connection returned to
//! the pool.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::ports::{IdentityStore, PasswordHasher};
use crate::domain::{Error, LoginCredentials, Registration, UserId, UserSummary};

use super::error_mapping::{is_unique_violation, map_join_error, map_pool_error, map_query_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the identity store port.
#[derive(Clone)]
pub struct DieselIdentityStore {
    pool: DbPool,
    hasher: Arc<dyn PasswordHasher>,
}

impl DieselIdentityStore {
    /// Create a new store with the given pool and hashing capability.
    pub fn new(pool: DbPool, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { pool, hasher }
    }
}

fn map_register_error(error: diesel::result::Error) -> Error {
    if is_unique_violation(&error) {
        Error::duplicate_identity("Username or email already exists")
    } else {
        map_query_error(error)
    }
}

#[async_trait]
impl IdentityStore for DieselIdentityStore {
    async fn register(&self, registration: &Registration) -> Result<UserId, Error> {
        let digest = self.hasher.hash(registration.password()).await?;
        let pool = self.pool.clone();
        let username = registration.username().to_owned();
        let email = registration.email().to_owned();

        let id = task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            diesel::insert_into(users::table)
                .values(NewUserRow {
                    username: &username,
                    email: &email,
                    password: &digest,
                })
                .returning(users::id)
                .get_result::<i32>(&mut conn)
                .map_err(map_register_error)
        })
        .await
        .map_err(map_join_error)??;

        Ok(UserId::new(id))
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserSummary, Error> {
        let pool = self.pool.clone();
        let email = credentials.email().to_owned();

        let row = task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            users::table
                .filter(users::email.eq(&email))
                .select(UserRow::as_select())
                .first(&mut conn)
                .optional()
                .map_err(map_query_error)
        })
        .await
        .map_err(map_join_error)??;

        let Some(user) = row else {
            return Err(Error::not_found("User not found"));
        };

        if self
            .hasher
            .verify(credentials.password(), &user.password)
            .await?
        {
            Ok(UserSummary {
                id: UserId::new(user.id),
                username: user.username,
                email: user.email,
            })
        } else {
            Err(Error::invalid_credentials("Invalid credentials"))
        }
    }
}
