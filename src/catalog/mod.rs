//! Product catalog service: seeded repository + HTTP surface

pub mod handlers;
pub mod product;
pub mod repository;

pub use product::Product;
pub use repository::ProductRepository;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::config::CatalogConfig;
use crate::http;

/// Build the catalog router.
///
/// Known paths answer GET only; other methods get a 405 with a JSON body,
/// unknown paths a 404.
pub fn app(repo: Arc<ProductRepository>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).fallback(http::method_not_allowed),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product).fallback(http::method_not_allowed),
        )
        .fallback(http::not_found)
        .with_state(repo)
}

/// Bind and run the catalog service.
pub async fn serve(config: &CatalogConfig) -> anyhow::Result<()> {
    let repo = Arc::new(ProductRepository::seeded());
    let app = app(repo);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind product service to {}", addr))?;

    println!("🛒 Product service running on http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("product service server error")
}
