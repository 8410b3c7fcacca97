//! Database row for a workflow log.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct DbLog {
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
    pub metrics: Option<String>,
    pub payload: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbLog {
    /// Column list matching the field order above, for SELECTs.
    pub const COLUMNS: &'static str = "id, client_id, environment, workflow_version, ticket_id, \
        executed_at, execution_time_seconds, status, category, resolution_status, metrics, \
        payload, created_at";
}
