//! Environment-driven settings, loaded once at startup.

use std::collections::HashMap;

/// Immutable process configuration. Built from `LOGWELL_*` environment
/// variables by [`Config::from_env`] and passed down explicitly; core logic
/// never reads the environment on its own.
#[derive(Debug, Clone)]
pub struct Config {
  /// Deployment environment of this service itself (reported by /health).
  pub environment: String,
  /// HTTP bind address.
  pub addr: String,
  /// sqlx database URL.
  pub database_url: String,
  /// API key -> client_id. Read-only for the process lifetime.
  pub api_keys: HashMap<String, String>,
  pub default_page_size: u32,
  pub max_page_size: u32,
}

impl Config {
  pub fn from_env() -> Result<Config, String> {
    let api_keys = match std::env::var("LOGWELL_API_KEYS") {
      Ok(raw) => serde_json::from_str::<HashMap<String, String>>(&raw)
        .map_err(|e| format!("LOGWELL_API_KEYS is not a valid JSON object: {e}"))?,
      Err(_) => HashMap::new(),
    };

    Ok(Config {
      environment: std::env::var("LOGWELL_ENV").unwrap_or_else(|_| "development".to_string()),
      addr: std::env::var("LOGWELL_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
      database_url: std::env::var("LOGWELL_DATABASE")
        .unwrap_or_else(|_| "sqlite://logwell.db".to_string()),
      api_keys,
      default_page_size: parse_env("LOGWELL_DEFAULT_PAGE_SIZE", 50)?,
      max_page_size: parse_env("LOGWELL_MAX_PAGE_SIZE", 100)?,
    })
  }
}

fn parse_env(name: &str, default: u32) -> Result<u32, String> {
  match std::env::var(name) {
    Ok(raw) => raw
      .parse::<u32>()
      .map_err(|_| format!("{name} must be a positive integer, got '{raw}'")),
    Err(_) => Ok(default),
  }
}
