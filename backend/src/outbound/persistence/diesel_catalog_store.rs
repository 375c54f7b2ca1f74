//! SQLite-backed `CatalogStore` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::ports::CatalogStore;
use crate::domain::{Error, Product, ProductId};

use super::error_mapping::{map_join_error, map_pool_error, map_query_error};
use super::models::ProductRow;
use super::pool::DbPool;
use super::schema::products;

/// Diesel-backed implementation of the catalog store port.
#[derive(Clone)]
pub struct DieselCatalogStore {
    pool: DbPool,
}

impl DieselCatalogStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_product(row: ProductRow) -> Product {
    Product {
        id: ProductId::new(row.id),
        name: row.name,
        description: row.description,
        price: row.price,
        image_url: row.image_url,
    }
}

#[async_trait]
impl CatalogStore for DieselCatalogStore {
    async fn list_all(&self) -> Result<Vec<Product>, Error> {
        let pool = self.pool.clone();
        let rows = task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            products::table
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load(&mut conn)
                .map_err(map_query_error)
        })
        .await
        .map_err(map_join_error)??;

        Ok(rows.into_iter().map(row_to_product).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, Error> {
        let pool = self.pool.clone();
        let row = task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            products::table
                .find(id.as_i32())
                .select(ProductRow::as_select())
                .first(&mut conn)
                .optional()
                .map_err(map_query_error)
        })
        .await
        .map_err(map_join_error)??;

        row.map(row_to_product)
            .ok_or_else(|| Error::not_found("Product not found"))
    }
}
