//! Port for the persisted product catalog.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId};

/// Read-only access to stored products.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every stored product, in a stable order.
    async fn list_all(&self) -> Result<Vec<Product>, Error>;

    /// A single product by identifier.
    ///
    /// # Errors
    /// [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_by_id(&self, id: ProductId) -> Result<Product, Error>;
}
