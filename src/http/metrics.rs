//! Aggregated metrics handlers.

use crate::{app::AppState, auth::Client, error::ApiError, util::round2};
use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
  pub days: Option<u32>,
}

/// Resolve the lookback window `[now - days, now]`, days in 1..=90.
pub fn metrics_window(days: Option<u32>) -> Result<(u32, DateTime<Utc>, DateTime<Utc>), ApiError> {
  let days = days.unwrap_or(7);
  if !(1..=90).contains(&days) {
    return Err(ApiError::InvalidQuery(
      "days must be between 1 and 90".to_string(),
    ));
  }
  let now = Utc::now();
  Ok((days, now - Duration::days(days as i64), now))
}

#[derive(Debug, Serialize)]
pub struct OverviewMetrics {
  pub total_tickets: i64,
  pub success_rate: f64,
  pub avg_execution_time: f64,
  pub error_count: i64,
  pub total_logs: i64,
  pub period_days: u32,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
  pub data: OverviewMetrics,
  pub client_id: String,
}

pub async fn overview_metrics(
  State(state): State<AppState>,
  client: Client,
  Query(params): Query<MetricsQuery>,
) -> Result<Json<OverviewResponse>, ApiError> {
  let (days, start, end) = metrics_window(params.days)?;

  // One aggregate pass over the (client_id, executed_at) index. SQL AVG
  // skips NULL durations, which is the intended mean-over-present-values.
  let row = sqlx::query(
    "SELECT COUNT(*) AS total, \
     COALESCE(SUM(CASE WHEN status = 'SUCCESS' THEN 1 ELSE 0 END), 0) AS success, \
     COALESCE(SUM(CASE WHEN status IN ('ERROR', 'FAILED') THEN 1 ELSE 0 END), 0) AS errors, \
     AVG(execution_time_seconds) AS avg_time \
     FROM workflow_logs WHERE client_id = ? AND executed_at >= ? AND executed_at <= ?",
  )
  .bind(&client.0)
  .bind(start)
  .bind(end)
  .fetch_one(&state.db)
  .await?;

  let total: i64 = row.get("total");
  let success: i64 = row.get("success");
  let errors: i64 = row.get("errors");
  let avg_time: Option<f64> = row.get("avg_time");

  // total == 0 must yield zeros, never a division error
  let success_rate = if total > 0 {
    round2(success as f64 * 100.0 / total as f64)
  } else {
    0.0
  };

  Ok(Json(OverviewResponse {
    data: OverviewMetrics {
      total_tickets: total,
      success_rate,
      avg_execution_time: round2(avg_time.unwrap_or(0.0)),
      error_count: errors,
      total_logs: total,
      period_days: days,
    },
    client_id: client.0,
  }))
}

#[derive(Debug, Serialize)]
pub struct CategoryBucket {
  pub category: String,
  pub count: i64,
  pub success_count: i64,
  pub success_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
  pub data: Vec<CategoryBucket>,
  pub period_days: u32,
}

pub async fn category_breakdown(
  State(state): State<AppState>,
  client: Client,
  Query(params): Query<MetricsQuery>,
) -> Result<Json<CategoryResponse>, ApiError> {
  let (days, start, end) = metrics_window(params.days)?;

  // Missing categories fold into a literal bucket; grouping on the COALESCE
  // also merges records that spell out "uncategorized" themselves
  let rows = sqlx::query(
    "SELECT COALESCE(category, 'uncategorized') AS category, COUNT(*) AS count, \
     COALESCE(SUM(CASE WHEN status = 'SUCCESS' THEN 1 ELSE 0 END), 0) AS success_count \
     FROM workflow_logs WHERE client_id = ? AND executed_at >= ? AND executed_at <= ? \
     GROUP BY COALESCE(category, 'uncategorized') \
     ORDER BY count DESC, category ASC",
  )
  .bind(&client.0)
  .bind(start)
  .bind(end)
  .fetch_all(&state.db)
  .await?;

  let data = rows
    .into_iter()
    .map(|row| {
      let count: i64 = row.get("count");
      let success_count: i64 = row.get("success_count");
      CategoryBucket {
        category: row.get("category"),
        count,
        success_count,
        success_rate: if count > 0 {
          round2(success_count as f64 * 100.0 / count as f64)
        } else {
          0.0
        },
      }
    })
    .collect();

  Ok(Json(CategoryResponse {
    data,
    period_days: days,
  }))
}
