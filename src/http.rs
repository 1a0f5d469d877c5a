//! Shared HTTP response plumbing
//!
//! Both services speak the hand-rolled wire format, so responses are built
//! from pre-encoded body strings rather than serde-backed extractors.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::wire;

/// Build an `application/json` response from a pre-encoded body.
pub fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Method-mismatch fallback for routed paths: 405 with a JSON error body.
pub async fn method_not_allowed() -> Response {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        wire::error_body("Method not allowed"),
    )
}

/// Router-level fallback for paths outside the service surface.
pub async fn not_found() -> Response {
    json_response(StatusCode::NOT_FOUND, wire::error_body("Not found"))
}
