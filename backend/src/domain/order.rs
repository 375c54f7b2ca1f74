//! Order placement inputs and read models.
//!
//! [`OrderDraft::try_new`] performs every precondition check before the
//! ledger opens a transaction: a positive buyer id, at least one line item,
//! and a positive quantity on every item. Totals and unit prices are
//! caller-declared and deliberately not recomputed or checked against the
//! catalog.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::ProductId;
use super::identity::UserId;

/// Identifier of a committed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(i32);

impl OrderId {
    /// Wrap a raw row identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw row identifier.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain error returned when a proposed order is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderValidationError {
    /// Buyer identifier was missing or not positive.
    MissingBuyer,
    /// The order carried no line items.
    EmptyItems,
    /// A line item quantity was zero or negative.
    NonPositiveQuantity,
}

impl fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBuyer => write!(f, "order buyer must be specified"),
            Self::EmptyItems => write!(f, "order must contain at least one item"),
            Self::NonPositiveQuantity => write!(f, "line item quantity must be positive"),
        }
    }
}

impl std::error::Error for OrderValidationError {}

/// One product/quantity/price entry belonging to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product_id: ProductId,
    quantity: i32,
    unit_price: f64,
}

impl LineItem {
    /// Construct a line item, rejecting non-positive quantities.
    pub fn try_new(
        product_id: ProductId,
        quantity: i32,
        unit_price: f64,
    ) -> Result<Self, OrderValidationError> {
        if quantity <= 0 {
            return Err(OrderValidationError::NonPositiveQuantity);
        }
        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    /// Referenced product.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Units ordered; always positive.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Caller-declared unit price.
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

/// A validated proposed order, ready for the ledger's atomic write.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    user_id: UserId,
    items: Vec<LineItem>,
    total: f64,
}

impl OrderDraft {
    /// Validate a proposed order before any storage write happens.
    pub fn try_new(
        user_id: UserId,
        items: Vec<LineItem>,
        total: f64,
    ) -> Result<Self, OrderValidationError> {
        if user_id.as_i32() <= 0 {
            return Err(OrderValidationError::MissingBuyer);
        }
        if items.is_empty() {
            return Err(OrderValidationError::EmptyItems);
        }
        Ok(Self {
            user_id,
            items,
            total,
        })
    }

    /// Buyer placing the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Line items in submission order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Caller-declared total; not recomputed from items.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// A committed order as read back from the ledger, without line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total: f64,
    pub date: DateTime<Utc>,
}
