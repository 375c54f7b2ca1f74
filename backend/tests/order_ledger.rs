//! Order ledger behaviour against a real SQLite file: round-trips,
//! rollback on mid-batch failure, and per-user reads.

mod support;

use storefront_backend::domain::ports::OrderLedger;
use storefront_backend::domain::{ErrorCode, LineItem, OrderDraft, ProductId, UserId};
use storefront_backend::outbound::persistence::DieselOrderLedger;

fn item(product_id: i32, quantity: i32, unit_price: f64) -> LineItem {
    LineItem::try_new(ProductId::new(product_id), quantity, unit_price).expect("valid line item")
}

#[tokio::test]
async fn placed_order_round_trips_item_count() {
    let db = support::test_db();
    let user = support::seed_user(&db.pool, "alice", "alice@example.com");
    let widget = support::seed_product(&db.pool, "Widget", 9.99);
    let gadget = support::seed_product(&db.pool, "Gadget", 4.5);
    let ledger = DieselOrderLedger::new(db.pool.clone());

    let draft = OrderDraft::try_new(
        UserId::new(user),
        vec![item(widget, 2, 9.99), item(gadget, 1, 4.5)],
        24.48,
    )
    .expect("valid draft");

    let order_id = ledger.place_order(&draft).await.expect("placement succeeds");

    assert_eq!(support::items_for_order(&db.pool, order_id.as_i32()), 2);

    let orders = ledger
        .orders_for_user(UserId::new(user))
        .await
        .expect("read back succeeds");
    assert_eq!(orders.len(), 1);
    let placed = orders.first().expect("one order");
    assert_eq!(placed.id, order_id);
    assert_eq!(placed.total, 24.48);
}

#[tokio::test]
async fn failed_item_insert_rolls_back_the_entire_order() {
    let db = support::test_db();
    let user = support::seed_user(&db.pool, "alice", "alice@example.com");
    let widget = support::seed_product(&db.pool, "Widget", 9.99);
    let ledger = DieselOrderLedger::new(db.pool.clone());

    // The second item references a product that does not exist; with
    // foreign keys enforced, its insert fails after the order row insert
    // already succeeded inside the transaction.
    let draft = OrderDraft::try_new(
        UserId::new(user),
        vec![item(widget, 1, 9.99), item(9999, 1, 1.0)],
        10.99,
    )
    .expect("valid draft");

    let err = ledger
        .place_order(&draft)
        .await
        .expect_err("placement must fail");
    assert_eq!(err.code(), ErrorCode::OrderPlacementFailed);

    // Nothing from the aborted call is observable.
    assert_eq!(support::order_row_count(&db.pool), 0);
    assert_eq!(support::order_item_row_count(&db.pool), 0);
}

#[tokio::test]
async fn order_for_unknown_user_is_rolled_back() {
    let db = support::test_db();
    let widget = support::seed_product(&db.pool, "Widget", 9.99);
    let ledger = DieselOrderLedger::new(db.pool.clone());

    let draft = OrderDraft::try_new(UserId::new(42), vec![item(widget, 1, 9.99)], 9.99)
        .expect("valid draft");

    let err = ledger
        .place_order(&draft)
        .await
        .expect_err("placement must fail");
    assert_eq!(err.code(), ErrorCode::OrderPlacementFailed);
    assert_eq!(support::order_row_count(&db.pool), 0);
    assert_eq!(support::order_item_row_count(&db.pool), 0);
}

#[tokio::test]
async fn rejected_drafts_never_touch_storage() {
    let db = support::test_db();
    let user = support::seed_user(&db.pool, "alice", "alice@example.com");

    // Validation happens before the ledger is reached; zero-item orders
    // cannot even be constructed.
    assert!(OrderDraft::try_new(UserId::new(user), Vec::new(), 0.0).is_err());
    assert!(LineItem::try_new(ProductId::new(1), 0, 9.99).is_err());

    assert_eq!(support::order_row_count(&db.pool), 0);
    assert_eq!(support::order_item_row_count(&db.pool), 0);
}

#[tokio::test]
async fn orders_are_scoped_to_their_owner() {
    let db = support::test_db();
    let alice = support::seed_user(&db.pool, "alice", "alice@example.com");
    let bob = support::seed_user(&db.pool, "bob", "bob@example.com");
    let widget = support::seed_product(&db.pool, "Widget", 9.99);
    let ledger = DieselOrderLedger::new(db.pool.clone());

    let alice_draft =
        OrderDraft::try_new(UserId::new(alice), vec![item(widget, 2, 9.99)], 19.98)
            .expect("valid draft");
    let bob_draft = OrderDraft::try_new(UserId::new(bob), vec![item(widget, 1, 9.99)], 9.99)
        .expect("valid draft");

    ledger.place_order(&alice_draft).await.expect("alice order");
    ledger.place_order(&bob_draft).await.expect("bob order");

    let alice_orders = ledger
        .orders_for_user(UserId::new(alice))
        .await
        .expect("alice read");
    assert_eq!(alice_orders.len(), 1);
    assert_eq!(
        alice_orders.first().expect("one order").user_id,
        UserId::new(alice)
    );

    let nobody = ledger
        .orders_for_user(UserId::new(999))
        .await
        .expect("empty read");
    assert!(nobody.is_empty());
}
