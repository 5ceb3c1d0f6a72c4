use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::Product;
use crate::AppState;

// ── Create ────────────────────────────────────────────────────────────────────

/// `POST /api/v1/products`. Decodes the body as a product, validates it, and
/// echoes it back on success.
///
/// The raw bytes are decoded directly instead of going through the JSON
/// extractor so that any undecodable body maps to the parse error reply and
/// decoding never depends on the `Content-Type` header.
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product: Product = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "Failed to parse product body");
        AppError::ParseBody
    })?;

    if let Err(err) = state.validator.validate(&product) {
        warn!(%err, "Rejected product");
        return Err(err.into());
    }

    info!(
        id = product.id,
        name = %product.name,
        price = product.price,
        currency = %product.currency,
        "Accepted product"
    );

    Ok((StatusCode::OK, Json(product)))
}
