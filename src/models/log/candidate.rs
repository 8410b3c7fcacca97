//! Incoming log candidate and its validation into a typed record.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::{Environment, LogStatus};

/// Body of `POST /logs` (and each element of a batch). Only the fields that
/// matter to the store are checked; `metrics`/`payload` pass through opaque.
#[derive(Debug, Deserialize)]
pub struct LogCandidate {
  pub environment: String,
  pub executed_at: DateTime<Utc>,
  pub workflow_version: Option<String>,
  pub ticket_id: Option<String>,
  pub execution_time_seconds: Option<f64>,
  pub status: Option<String>,
  pub category: Option<String>,
  pub resolution_status: Option<String>,
  pub metrics: Option<Value>,
  pub payload: Option<Value>,
}

impl LogCandidate {
  /// Check enumerations and numeric bounds before anything touches the store.
  pub fn validate(self) -> Result<NewLog, String> {
    let environment: Environment = self.environment.parse()?;
    let status = match self.status.as_deref() {
      Some(s) => Some(s.parse::<LogStatus>()?),
      None => None,
    };
    if let Some(t) = self.execution_time_seconds {
      if !t.is_finite() || t < 0.0 {
        return Err(format!(
          "execution_time_seconds must be a non-negative number (got {t})"
        ));
      }
    }
    Ok(NewLog {
      environment,
      executed_at: self.executed_at,
      workflow_version: self.workflow_version,
      ticket_id: self.ticket_id,
      execution_time_seconds: self.execution_time_seconds,
      status,
      category: self.category,
      resolution_status: self.resolution_status,
      metrics: self.metrics,
      payload: self.payload,
    })
  }
}

/// A candidate that passed validation. The client identity is deliberately not
/// part of this type; it comes from the authenticated caller at insert time.
#[derive(Debug)]
pub struct NewLog {
  pub environment: Environment,
  pub executed_at: DateTime<Utc>,
  pub workflow_version: Option<String>,
  pub ticket_id: Option<String>,
  pub execution_time_seconds: Option<f64>,
  pub status: Option<LogStatus>,
  pub category: Option<String>,
  pub resolution_status: Option<String>,
  pub metrics: Option<Value>,
  pub payload: Option<Value>,
}
