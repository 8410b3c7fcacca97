//! Application setup and runtime.

use crate::{config::Config, db, http};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
  pub config: Arc<Config>,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let config = Config::from_env()?;
  if config.api_keys.is_empty() {
    warn!("no API keys configured (LOGWELL_API_KEYS); every request will be rejected");
  }

  let db_url = db::ensure_sqlite_path(&config.database_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::run_migrations(&pool).await?;

  let addr: SocketAddr = config.addr.parse()?;
  let state = AppState {
    db: pool,
    config: Arc::new(config),
  };

  let app = http::build_router(state);

  info!("log ingestion:  POST http://{}/logs", addr);
  info!("log queries:    GET  http://{}/logs", addr);
  info!("metrics:        GET  http://{}/metrics/overview", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
