//! Catalog HTTP handlers (list, get-by-id)

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::repository::ProductRepository;
use crate::http::json_response;
use crate::wire;

/// GET /products
pub async fn list_products(State(repo): State<Arc<ProductRepository>>) -> Response {
    let body = wire::encode_array(repo.all().iter().map(|p| p.to_wire()));
    json_response(StatusCode::OK, body)
}

/// GET /products/{id}
///
/// A non-integer id is a client error, not a missing product.
pub async fn get_product(
    State(repo): State<Arc<ProductRepository>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<u32>() else {
        return json_response(
            StatusCode::BAD_REQUEST,
            wire::error_body("Invalid product ID"),
        );
    };

    match repo.find(id) {
        Some(product) => json_response(StatusCode::OK, product.to_wire()),
        None => json_response(StatusCode::NOT_FOUND, wire::error_body("Product not found")),
    }
}
