//! Catalog lookup capability and its HTTP adapter
//!
//! The aggregator depends on the `ProductLookup` trait, not on the network;
//! tests substitute an in-memory fake. The production adapter performs one
//! GET per lookup with bounded connect/read timeouts - no retries, no cache.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Product;
use crate::wire;

/// Lookup outcomes the aggregator distinguishes: found, not-found, or a
/// transport-level failure. Callers must not distinguish further.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Product not found: {0}")]
    NotFound(u32),

    #[error("{0}")]
    Transport(String),
}

#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn lookup(&self, product_id: u32) -> Result<Product, LookupError>;
}

/// HTTP adapter calling the catalog service.
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(format!("failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl ProductLookup for HttpCatalogClient {
    async fn lookup(&self, product_id: u32) -> Result<Product, LookupError> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        tracing::debug!("catalog lookup: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("catalog request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(product_id));
        }
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "catalog returned status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(format!("catalog response unreadable: {}", e)))?;
        let fields = wire::decode_object(&body)
            .map_err(|e| LookupError::Transport(format!("catalog response undecodable: {}", e)))?;
        Product::from_wire(&fields)
            .map_err(|e| LookupError::Transport(format!("catalog response invalid: {}", e)))
    }
}
