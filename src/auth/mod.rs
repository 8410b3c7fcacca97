//! API key authentication.
//!
//! An opaque `X-API-Key` header resolves to exactly one client identity via
//! the key map loaded at startup. Handlers take [`Client`] as an extractor;
//! any route without a valid key is rejected before touching the store.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::{app::AppState, error::ApiError};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticated client identity for one request.
#[derive(Debug, Clone)]
pub struct Client(pub String);

#[async_trait]
impl FromRequestParts<AppState> for Client {
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
    let key = parts
      .headers
      .get(API_KEY_HEADER)
      .and_then(|v| v.to_str().ok())
      .unwrap_or("");
    if key.is_empty() {
      warn!("request without API key");
      return Err(ApiError::Unauthenticated);
    }
    match state.config.api_keys.get(key) {
      Some(client_id) => Ok(Client(client_id.clone())),
      None => {
        // Never log the full credential
        let prefix: String = key.chars().take(8).collect();
        warn!("invalid API key attempted: {prefix}...");
        Err(ApiError::Unauthenticated)
      }
    }
  }
}
