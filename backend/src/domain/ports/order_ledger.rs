//! Port owning atomic creation of orders and their line items.

use async_trait::async_trait;

use crate::domain::{Error, Order, OrderDraft, OrderId, UserId};

/// The order ledger: the only component allowed to write orders.
#[async_trait]
pub trait OrderLedger: Send + Sync {
    /// Atomically persist an order and all of its line items.
    ///
    /// Either the order row and every item row become visible together, or
    /// nothing from this call persists. No reader may ever observe an order
    /// with a strict subset of its items.
    ///
    /// # Errors
    /// [`crate::domain::ErrorCode::OrderPlacementFailed`] when any write in
    /// the transaction fails; the whole write is rolled back first.
    async fn place_order(&self, draft: &OrderDraft) -> Result<OrderId, Error>;

    /// All orders owned by `user_id`, in a stable order, without line items.
    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, Error>;
}
