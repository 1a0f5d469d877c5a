//! Order service: aggregation pipeline + HTTP surface

pub mod client;
pub mod error;
pub mod handlers;
pub mod service;
pub mod store;
pub mod types;

pub use client::{HttpCatalogClient, LookupError, ProductLookup};
pub use error::OrderError;
pub use service::OrderService;
pub use store::OrderStore;
pub use types::{Order, OrderItem, OrderItemRequest};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::config::OrderServiceConfig;
use crate::http;

/// Build the order router. Known paths answer their one method; anything else
/// on them is a 405 with a JSON body.
pub fn app(service: Arc<OrderService>) -> Router {
    Router::new()
        .route(
            "/orders",
            post(handlers::create_order).fallback(http::method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::get_order).fallback(http::method_not_allowed),
        )
        .fallback(http::not_found)
        .with_state(service)
}

/// Bind and run the order service against the configured catalog.
pub async fn serve(config: &OrderServiceConfig) -> anyhow::Result<()> {
    let timeout = Duration::from_millis(config.catalog_timeout_ms);
    let client = HttpCatalogClient::new(config.catalog_base_url.as_str(), timeout)
        .context("failed to construct catalog client")?;
    let service = Arc::new(OrderService::new(Arc::new(client)));
    let app = app(service);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind order service to {}", addr))?;

    println!("📦 Order service running on http://{}", addr);
    println!("   → catalog at {}", config.catalog_base_url);
    axum::serve(listener, app)
        .await
        .context("order service server error")
}
