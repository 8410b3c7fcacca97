//! Log query handlers: filtered listing and single-record lookup.

use crate::{
  app::AppState,
  auth::Client,
  config::Config,
  error::ApiError,
  models::{
    log::{api_log::ApiLog, db_log::DbLog},
    response::log_page::{EchoedFilters, LogPage, Pagination},
  },
};
use axum::{
  Json,
  extract::{Path as AxumPath, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
  pub environment: Option<String>,
  pub status: Option<String>,
  pub category: Option<String>,
  pub ticket_id: Option<String>,
  pub start_date: Option<DateTime<Utc>>,
  pub end_date: Option<DateTime<Utc>>,
  pub page: Option<u32>,
  pub page_size: Option<u32>,
}

/// Resolve the pagination window, rejecting out-of-bounds values instead of
/// clamping them.
pub fn page_window(p: &LogQuery, config: &Config) -> Result<(u32, u32, u32), ApiError> {
  let page = p.page.unwrap_or(1);
  if page < 1 {
    return Err(ApiError::InvalidQuery("page must be >= 1".to_string()));
  }
  let page_size = p.page_size.unwrap_or(config.default_page_size);
  if page_size < 1 || page_size > config.max_page_size {
    return Err(ApiError::InvalidQuery(format!(
      "page_size must be between 1 and {}",
      config.max_page_size
    )));
  }
  Ok((page, page_size, (page - 1) * page_size))
}

/// Start a SELECT over `workflow_logs` with the caller's filters ANDed on.
/// The client_id predicate always comes first and cannot be overridden by any
/// request parameter.
fn filtered<'a>(select: &str, client_id: &'a str, q: &'a LogQuery) -> QueryBuilder<'a, Sqlite> {
  let mut qb = QueryBuilder::new(select);
  qb.push(" FROM workflow_logs WHERE client_id = ");
  qb.push_bind(client_id);
  if let Some(environment) = &q.environment {
    qb.push(" AND environment = ");
    qb.push_bind(environment);
  }
  if let Some(status) = &q.status {
    qb.push(" AND status = ");
    qb.push_bind(status);
  }
  if let Some(category) = &q.category {
    qb.push(" AND category = ");
    qb.push_bind(category);
  }
  if let Some(ticket_id) = &q.ticket_id {
    qb.push(" AND ticket_id = ");
    qb.push_bind(ticket_id);
  }
  if let Some(start) = q.start_date {
    qb.push(" AND executed_at >= ");
    qb.push_bind(start);
  }
  if let Some(end) = q.end_date {
    qb.push(" AND executed_at <= ");
    qb.push_bind(end);
  }
  qb
}

pub async fn list_logs(
  State(state): State<AppState>,
  client: Client,
  Query(params): Query<LogQuery>,
) -> Result<Json<LogPage>, ApiError> {
  let (page, page_size, offset) = page_window(&params, &state.config)?;

  // Total over the full filtered set, independent of the window
  let total: i64 = filtered("SELECT COUNT(*)", &client.0, &params)
    .build_query_scalar()
    .fetch_one(&state.db)
    .await?;

  let mut qb = filtered(
    &format!("SELECT {}", DbLog::COLUMNS),
    &client.0,
    &params,
  );
  // id tiebreaker keeps the order total, so pages never overlap on equal timestamps
  qb.push(" ORDER BY executed_at DESC, id ASC LIMIT ");
  qb.push_bind(page_size as i64);
  qb.push(" OFFSET ");
  qb.push_bind(offset as i64);
  let rows: Vec<DbLog> = qb.build_query_as().fetch_all(&state.db).await?;

  Ok(Json(LogPage {
    data: rows.into_iter().map(ApiLog::from).collect(),
    pagination: Pagination {
      page,
      page_size,
      total,
      pages: (total + page_size as i64 - 1) / page_size as i64,
    },
    filters: EchoedFilters {
      environment: params.environment,
      status: params.status,
      category: params.category,
      ticket_id: params.ticket_id,
      start_date: params.start_date,
      end_date: params.end_date,
    },
  }))
}

#[derive(Debug, Serialize)]
pub struct LogDetail {
  pub data: ApiLog,
}

/// Single-record lookup. A record owned by another client is reported exactly
/// like a record that does not exist.
pub async fn get_log(
  State(state): State<AppState>,
  client: Client,
  AxumPath(id): AxumPath<Uuid>,
) -> Result<Json<LogDetail>, ApiError> {
  let row: Option<DbLog> = sqlx::query_as(&format!(
    "SELECT {} FROM workflow_logs WHERE id = ? AND client_id = ?",
    DbLog::COLUMNS
  ))
  .bind(id)
  .bind(&client.0)
  .fetch_optional(&state.db)
  .await?;

  match row {
    Some(log) => Ok(Json(LogDetail {
      data: ApiLog::from(log),
    })),
    None => Err(ApiError::NotFound),
  }
}
