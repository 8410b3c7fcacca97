//! Utility functions: tracing setup, numeric helpers.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Round to two decimal places, the precision all rate/time metrics report.
pub fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}
