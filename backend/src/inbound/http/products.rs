//! Product read endpoints.
//!
//! ```text
//! GET /api/products
//! GET /api/products/{id}
//! ```

use actix_web::{get, web};

use crate::domain::{Product, ProductId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, DataEnvelope};

/// List every stored product.
#[get("")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DataEnvelope<Vec<Product>>>> {
    let products = state.catalog.list_all().await?;
    Ok(web::Json(DataEnvelope { data: products }))
}

/// Fetch a single product by identifier.
#[get("/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DataEnvelope<Product>>> {
    let product = state
        .catalog
        .get_by_id(ProductId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DataEnvelope { data: product }))
}
