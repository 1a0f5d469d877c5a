//! microshop - two-service commerce demo
//!
//! A product catalog service and an order service that composes orders by
//! calling the catalog over HTTP.
//!
//! # Modules
//!
//! - [`wire`] - Hand-rolled JSON-subset codec shared by both services
//! - [`money`] - Half-up rounding and two-decimal wire formatting
//! - [`http`] - Shared response plumbing (json bodies, 405/404 fallbacks)
//! - [`config`] - YAML configuration (`config/{env}.yaml`)
//! - [`logging`] - tracing subscriber setup
//! - [`catalog`] - Product type, seeded repository, catalog HTTP surface
//! - [`order`] - Aggregation pipeline, catalog client, store, order HTTP surface

pub mod config;
pub mod http;
pub mod logging;
pub mod money;
pub mod wire;

pub mod catalog;
pub mod order;

// Convenient re-exports at crate root
pub use catalog::{Product, ProductRepository};
pub use order::{Order, OrderItem, OrderItemRequest, OrderService, OrderStore};
