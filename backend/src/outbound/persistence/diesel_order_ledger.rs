//! SQLite-backed `OrderLedger`: the atomic order-placement write path.
//!
//! `place_order` runs a single immediate transaction: the order row is
//! inserted first to obtain its generated id, then every line item
//! referencing it, and the transaction commits only when all inserts
//! succeed. Any failure rolls the whole write back, so an order row is
//! never visible without the full set of its item rows.
//!
//! The immediate transaction takes SQLite's write lock up front, which
//! serialises concurrent placements; readers on other connections see an
//! order and its items appear together at commit. Because commit or
//! rollback resolves inside the blocking closure, a caller disconnecting
//! mid-request cannot leave the transaction half-applied.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use tracing::{debug, error};

use crate::domain::ports::OrderLedger;
use crate::domain::{Error, Order, OrderDraft, OrderId, UserId};

use super::error_mapping::{map_join_error, map_pool_error, map_query_error};
use super::models::{NewOrderItemRow, NewOrderRow, OrderRow};
use super::pool::DbPool;
use super::schema::{order_items, orders};

/// Diesel-backed implementation of the order ledger port.
#[derive(Clone)]
pub struct DieselOrderLedger {
    pool: DbPool,
}

impl DieselOrderLedger {
    /// Create a new ledger with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_placement_error(error: diesel::result::Error) -> Error {
    error!(error = %error, "order placement aborted");
    Error::order_placement_failed(format!("order placement failed: {error}"))
}

fn row_to_order(row: OrderRow) -> Order {
    Order {
        id: OrderId::new(row.id),
        user_id: UserId::new(row.user_id),
        total: row.total,
        date: row.date,
    }
}

#[async_trait]
impl OrderLedger for DieselOrderLedger {
    async fn place_order(&self, draft: &OrderDraft) -> Result<OrderId, Error> {
        debug!(user = %draft.user_id(), items = draft.items().len(), "placing order");
        let pool = self.pool.clone();
        let draft = draft.clone();

        let id = task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            let placed_at = Utc::now();
            conn.immediate_transaction(|conn| {
                let order_id = diesel::insert_into(orders::table)
                    .values(NewOrderRow {
                        user_id: draft.user_id().as_i32(),
                        total: draft.total(),
                        date: placed_at,
                    })
                    .returning(orders::id)
                    .get_result::<i32>(conn)?;

                let item_rows: Vec<NewOrderItemRow> = draft
                    .items()
                    .iter()
                    .map(|item| NewOrderItemRow {
                        order_id,
                        product_id: item.product_id().as_i32(),
                        quantity: item.quantity(),
                        price: item.unit_price(),
                    })
                    .collect();
                diesel::insert_into(order_items::table)
                    .values(&item_rows)
                    .execute(conn)?;

                Ok(order_id)
            })
            .map_err(map_placement_error)
        })
        .await
        .map_err(map_join_error)??;

        Ok(OrderId::new(id))
    }

    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, Error> {
        let pool = self.pool.clone();
        let rows = task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            orders::table
                .filter(orders::user_id.eq(user_id.as_i32()))
                .order(orders::id.asc())
                .select(OrderRow::as_select())
                .load(&mut conn)
                .map_err(map_query_error)
        })
        .await
        .map_err(map_join_error)??;

        Ok(rows.into_iter().map(row_to_order).collect())
    }
}
