//! API representation of a workflow log.

use super::db_log::DbLog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ApiLog {
  pub id: Uuid,
  pub client_id: String,
  pub environment: String,
  pub workflow_version: Option<String>,
  pub ticket_id: Option<String>,
  pub executed_at: DateTime<Utc>,
  pub execution_time_seconds: Option<f64>,
  pub status: Option<String>,
  pub category: Option<String>,
  pub resolution_status: Option<String>,
  pub metrics: Option<Value>,
  pub payload: Option<Value>,
  pub created_at: DateTime<Utc>,
}

impl From<DbLog> for ApiLog {
  fn from(d: DbLog) -> Self {
    // metrics/payload are stored as opaque JSON text; hand them back as-is
    let metrics = d.metrics.as_deref().and_then(|s| serde_json::from_str(s).ok());
    let payload = d.payload.as_deref().and_then(|s| serde_json::from_str(s).ok());
    ApiLog {
      id: d.id,
      client_id: d.client_id,
      environment: d.environment,
      workflow_version: d.workflow_version,
      ticket_id: d.ticket_id,
      executed_at: d.executed_at,
      execution_time_seconds: d.execution_time_seconds,
      status: d.status,
      category: d.category,
      resolution_status: d.resolution_status,
      metrics,
      payload,
      created_at: d.created_at,
    }
  }
}
