//! API route handlers
//!
//! - `health`: liveness and readiness probes
//! - `bidding`: the ad auction endpoint

pub mod bidding;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /).
///
/// # Response
///
/// ```json
/// {
///   "name": "RTB Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "RTB Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/bidding/ad",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
