//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod orders;
pub mod products;
pub mod state;

pub use error::ApiResult;

use serde::Serialize;

/// Envelope for read responses: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
