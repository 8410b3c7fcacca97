//! Log ingestion handlers.

use crate::{
  app::AppState,
  auth::Client,
  error::ApiError,
  models::log::candidate::{LogCandidate, NewLog},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{error, info};
use uuid::Uuid;

/// Hard cap on candidates per batch request.
pub const MAX_BATCH: usize = 100;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
  pub status: &'static str,
  pub log_id: Uuid,
  pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
  pub status: &'static str,
  /// Number of records actually persisted.
  pub count: usize,
  pub log_ids: Vec<Uuid>,
  pub failures: Vec<BatchFailure>,
}

#[derive(Debug, Serialize)]
pub struct BatchFailure {
  /// Position of the failed candidate in the submitted array.
  pub index: usize,
  pub error: String,
}

/// Insert one validated record. The client identity always comes from the
/// authenticated caller, never from the request body.
async fn insert_log(db: &SqlitePool, client_id: &str, log: &NewLog) -> Result<Uuid, sqlx::Error> {
  let id = Uuid::new_v4();
  let metrics_json = log.metrics.as_ref().map(|v| v.to_string());
  let payload_json = log.payload.as_ref().map(|v| v.to_string());
  sqlx::query(
    "INSERT INTO workflow_logs (id, client_id, environment, workflow_version, ticket_id, \
     executed_at, execution_time_seconds, status, category, resolution_status, metrics, \
     payload, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
  )
  .bind(id)
  .bind(client_id)
  .bind(log.environment.as_str())
  .bind(&log.workflow_version)
  .bind(&log.ticket_id)
  .bind(log.executed_at)
  .bind(log.execution_time_seconds)
  .bind(log.status.map(|s| s.as_str()))
  .bind(&log.category)
  .bind(&log.resolution_status)
  .bind(metrics_json)
  .bind(payload_json)
  .bind(Utc::now())
  .execute(db)
  .await?;
  Ok(id)
}

pub async fn ingest_log(
  State(state): State<AppState>,
  client: Client,
  Json(candidate): Json<LogCandidate>,
) -> Result<impl IntoResponse, ApiError> {
  let log = candidate.validate().map_err(ApiError::InvalidPayload)?;
  let id = insert_log(&state.db, &client.0, &log).await?;
  info!("log ingested: {id} for client {}", client.0);
  Ok((
    StatusCode::CREATED,
    Json(IngestResponse {
      status: "success",
      log_id: id,
      message: "Log ingested successfully",
    }),
  ))
}

/// Batch ingestion. Candidates commit independently: one bad entry neither
/// rolls back earlier inserts nor stops later ones, and every outcome is
/// reported back by index.
pub async fn ingest_batch(
  State(state): State<AppState>,
  client: Client,
  Json(candidates): Json<Vec<LogCandidate>>,
) -> Result<impl IntoResponse, ApiError> {
  if candidates.len() > MAX_BATCH {
    return Err(ApiError::BatchTooLarge {
      submitted: candidates.len(),
    });
  }

  let mut log_ids = Vec::new();
  let mut failures = Vec::new();
  for (index, candidate) in candidates.into_iter().enumerate() {
    match candidate.validate() {
      Ok(log) => match insert_log(&state.db, &client.0, &log).await {
        Ok(id) => log_ids.push(id),
        Err(e) => {
          error!("batch item {index} insert failed: {e}");
          failures.push(BatchFailure {
            index,
            error: "failed to store log".to_string(),
          });
        }
      },
      Err(reason) => failures.push(BatchFailure {
        index,
        error: reason,
      }),
    }
  }

  info!(
    "batch ingested: {} of {} logs for client {}",
    log_ids.len(),
    log_ids.len() + failures.len(),
    client.0
  );
  Ok((
    StatusCode::CREATED,
    Json(BatchResponse {
      status: if failures.is_empty() { "success" } else { "partial" },
      count: log_ids.len(),
      log_ids,
      failures,
    }),
  ))
}
