//! Request error taxonomy and its single HTTP mapping.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::http::ingest::MAX_BATCH;

/// Everything a handler can fail with. Validation variants carry the reason
/// shown to the caller; store failures stay opaque on the wire.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid or missing API key")]
  Unauthenticated,
  #[error("{0}")]
  InvalidPayload(String),
  #[error("maximum {max} logs per batch, got {submitted}", max = MAX_BATCH)]
  BatchTooLarge { submitted: usize },
  #[error("{0}")]
  InvalidQuery(String),
  #[error("log not found")]
  NotFound,
  #[error("database error")]
  Store(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let code = match &self {
      ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
      ApiError::InvalidPayload(_) | ApiError::BatchTooLarge { .. } | ApiError::InvalidQuery(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Store(e) => {
        // Log the storage detail here; the caller only sees a generic 500.
        error!("store error: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    (code, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
