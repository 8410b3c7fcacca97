//! Workflow log record types and their fixed enumerations.

use std::str::FromStr;

pub mod api_log;
pub mod candidate;
pub mod db_log;

/// Deployment environment a workflow ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
  Production,
  Staging,
  Development,
}

impl Environment {
  pub fn as_str(&self) -> &'static str {
    match self {
      Environment::Production => "production",
      Environment::Staging => "staging",
      Environment::Development => "development",
    }
  }
}

impl FromStr for Environment {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "production" => Ok(Environment::Production),
      "staging" => Ok(Environment::Staging),
      "development" => Ok(Environment::Development),
      other => Err(format!(
        "environment must be one of production, staging, development (got '{other}')"
      )),
    }
  }
}

/// Outcome of a workflow execution, when the client reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
  Success,
  Error,
  Partial,
  Failed,
}

impl LogStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      LogStatus::Success => "SUCCESS",
      LogStatus::Error => "ERROR",
      LogStatus::Partial => "PARTIAL",
      LogStatus::Failed => "FAILED",
    }
  }
}

impl FromStr for LogStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "SUCCESS" => Ok(LogStatus::Success),
      "ERROR" => Ok(LogStatus::Error),
      "PARTIAL" => Ok(LogStatus::Partial),
      "FAILED" => Ok(LogStatus::Failed),
      other => Err(format!(
        "status must be one of SUCCESS, ERROR, PARTIAL, FAILED (got '{other}')"
      )),
    }
  }
}
