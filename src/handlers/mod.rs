pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// `GET /ping`. Fixed liveness reply.
pub async fn ping() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "message": "pong" })))
}
