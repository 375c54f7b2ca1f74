//! Minimal e-commerce backend: registration/login, product listing, and
//! atomic order placement over a single SQLite database file.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! transport-agnostic types and port traits, [`inbound::http`] the actix-web
//! handlers, and [`outbound`] the Diesel and bcrypt adapters. [`server`]
//! wires the three together.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
