//! Paginated query response envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::log::api_log::ApiLog;

#[derive(Debug, Serialize)]
pub struct LogPage {
  pub data: Vec<ApiLog>,
  pub pagination: Pagination,
  pub filters: EchoedFilters,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
  pub page: u32,
  pub page_size: u32,
  pub total: i64,
  /// ceil(total / page_size)
  pub pages: i64,
}

/// The filter values the query actually ran with, echoed back.
#[derive(Debug, Serialize)]
pub struct EchoedFilters {
  pub environment: Option<String>,
  pub status: Option<String>,
  pub category: Option<String>,
  pub ticket_id: Option<String>,
  pub start_date: Option<DateTime<Utc>>,
  pub end_date: Option<DateTime<Utc>>,
}
