//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can return becomes one JSON envelope:
//! `{"code": <status>, "status": "<status text>", "message": "<detail>"}`.
//! Parse failures map to 500 with a fixed message, validation failures map
//! to 400 with the violation message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body was not a decodable product payload.
    #[error("error parsing body")]
    ParseBody,

    /// The payload decoded but violated a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ParseBody => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Wire shape of an error reply. Field order is the serialized order.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    status: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or(""),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
