//! Order endpoints: atomic placement and per-user history.
//!
//! ```text
//! POST /api/orders {"userId":1,"items":[{"productId":1,"quantity":2,"price":9.99}],"total":19.98}
//! GET /api/orders/{userId}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, LineItem, Order, OrderDraft, OrderId, OrderValidationError, ProductId, UserId,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, DataEnvelope};

/// One line item as submitted by the client.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

/// Order request body for `POST /api/orders`.
///
/// Fields are optional so missing values fail shape validation instead of
/// deserialization; the declared total is trusted, not recomputed.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub items: Option<Vec<LineItemRequest>>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl TryFrom<PlaceOrderRequest> for OrderDraft {
    type Error = OrderValidationError;

    fn try_from(value: PlaceOrderRequest) -> Result<Self, Self::Error> {
        let items = value
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| LineItem::try_new(ProductId::new(item.product_id), item.quantity, item.price))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(
            UserId::new(value.user_id.unwrap_or_default()),
            items,
            value.total.unwrap_or_default(),
        )
    }
}

/// Successful placement payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: OrderId,
}

/// Atomically place an order with its line items.
#[post("")]
pub async fn place_order(
    state: web::Data<HttpState>,
    payload: web::Json<PlaceOrderRequest>,
) -> ApiResult<web::Json<PlaceOrderResponse>> {
    let draft = OrderDraft::try_from(payload.into_inner())
        .map_err(|err| Error::invalid_input(err.to_string()))?;

    let order_id = state.orders.place_order(&draft).await?;
    Ok(web::Json(PlaceOrderResponse {
        message: "Order placed successfully".into(),
        order_id,
    }))
}

/// List every order owned by a user.
#[get("/{user_id}")]
pub async fn user_orders(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DataEnvelope<Vec<Order>>>> {
    let orders = state
        .orders
        .orders_for_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DataEnvelope { data: orders }))
}
