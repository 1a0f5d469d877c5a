//! Order service error taxonomy and HTTP translation
//!
//! Client faults (bad input, unknown product) surface as 400 with the error
//! message; an absent order is 404; upstream catalog failures are 500 with a
//! generic body - the diagnostic stays in the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::client::LookupError;
use crate::http::json_response;
use crate::wire::{self, WireError};

#[derive(Debug, Error)]
pub enum OrderError {
    /// Malformed or empty input; message is echoed to the client.
    #[error("{0}")]
    InvalidRequest(String),

    /// A referenced product does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// The requested order id is unknown.
    #[error("Order not found")]
    NotFound,

    /// Catalog unreachable or erroring; detail is never sent to the client.
    #[error("upstream catalog failure: {0}")]
    Upstream(String),
}

impl From<LookupError> for OrderError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(product_id) => OrderError::ProductNotFound(product_id),
            LookupError::Transport(detail) => OrderError::Upstream(detail),
        }
    }
}

impl From<WireError> for OrderError {
    fn from(err: WireError) -> Self {
        OrderError::InvalidRequest(err.to_string())
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            OrderError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, wire::error_body(message))
            }
            OrderError::ProductNotFound(_) => {
                (StatusCode::BAD_REQUEST, wire::error_body(&self.to_string()))
            }
            OrderError::NotFound => (
                StatusCode::NOT_FOUND,
                wire::error_body("Order not found"),
            ),
            OrderError::Upstream(detail) => {
                tracing::error!("order pipeline failed upstream: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    wire::error_body("Internal server error"),
                )
            }
        };
        json_response(status, body)
    }
}
