//! Database helpers: migrations and path handling.

use sqlx::SqlitePool;
use std::path::Path;

/// Run SQLite migrations to create tables and indexes if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS workflow_logs (
            id TEXT PRIMARY KEY,
            client_id TEXT NOT NULL,
            environment TEXT NOT NULL,
            workflow_version TEXT NULL,
            ticket_id TEXT NULL,
            executed_at TEXT NOT NULL,
            execution_time_seconds REAL NULL,
            status TEXT NULL,
            category TEXT NULL,
            resolution_status TEXT NULL,
            metrics TEXT NULL,
            payload TEXT NULL,
            created_at TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    // Composite indexes behind the tenant-scoped read paths
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_client_executed ON workflow_logs (client_id, executed_at)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_client_status ON workflow_logs (client_id, status)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_environment_executed ON workflow_logs (environment, executed_at)",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url.trim_start_matches("sqlite://");
    if path_part == ":memory:" {
        return db_url.to_string();
    }
    let (path_only, _) = match path_part.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_part, None),
    };
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}
