//! logwell library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration wiring, shared state
//! - `auth`: API key to client resolution
//! - `config`: environment-driven settings
//! - `db`: migrations and SQLite helpers
//! - `error`: request error taxonomy and HTTP mapping
//! - `http`: Axum router and handlers
//! - `models`: typed records used across layers
//! - `util`: tracing setup and numeric helpers

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod util;
