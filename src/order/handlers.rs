//! Order HTTP handlers (create, retrieve)
//!
//! Bodies are decoded through the wire codec, not a serde extractor; any
//! failure surfaces through `OrderError`'s response translation.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::error::OrderError;
use super::service::OrderService;
use super::types::OrderItemRequest;
use crate::http::json_response;
use crate::wire;

/// POST /orders
pub async fn create_order(
    State(service): State<Arc<OrderService>>,
    body: String,
) -> Result<Response, OrderError> {
    let parsed = wire::extract_request_items(&body)?;

    let mut items = Vec::with_capacity(parsed.len());
    for fields in &parsed {
        items.push(OrderItemRequest::from_wire(fields)?);
    }

    let order = service.create_order(&items).await?;
    Ok(json_response(StatusCode::CREATED, order.to_wire()))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(service): State<Arc<OrderService>>,
    Path(order_id): Path<String>,
) -> Result<Response, OrderError> {
    let order = service.get_order(&order_id).ok_or(OrderError::NotFound)?;
    Ok(json_response(StatusCode::OK, order.to_wire()))
}
