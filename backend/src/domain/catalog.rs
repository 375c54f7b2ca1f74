//! Catalog read models.
//!
//! Products are read-only here; their lifecycle is managed elsewhere.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(i32);

impl ProductId {
    /// Wrap a raw row identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw row identifier.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable product as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}
