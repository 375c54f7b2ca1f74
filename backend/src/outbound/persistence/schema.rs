//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them
//! for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered users; `password` stores the bcrypt digest.
    users (id) {
        id -> Integer,
        username -> Text,
        email -> Text,
        password -> Text,
    }
}

diesel::table! {
    /// Catalog of purchasable products.
    products (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        price -> Double,
        image_url -> Nullable<Text>,
    }
}

diesel::table! {
    /// One row per placed order; line items live in `order_items`.
    orders (id) {
        id -> Integer,
        user_id -> Integer,
        total -> Double,
        date -> TimestamptzSqlite,
    }
}

diesel::table! {
    /// Line items belonging to an order, written only inside the
    /// placement transaction.
    order_items (id) {
        id -> Integer,
        order_id -> Integer,
        product_id -> Integer,
        quantity -> Integer,
        price -> Double,
    }
}

diesel::joinable!(orders -> users (user_id));
diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(order_items -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(users, products, orders, order_items);
