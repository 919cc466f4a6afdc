//! Shared test infrastructure.
//!
//! `setup_test_db()` opens a single-connection in-memory SQLite database and
//! runs the schema. One connection is load-bearing: every pooled connection
//! to `sqlite::memory:` would otherwise be its own empty database.

use sqlx::sqlite::SqlitePoolOptions;

use confsite::config::Config;
use confsite::db::{DbPool, MIGRATIONS};

pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "correct horse battery";

pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory test DB");
    sqlx::raw_sql(MIGRATIONS)
        .execute(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Config with fixed token secrets so tests can mint tokens directly.
pub fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        cors_origins: Vec::new(),
        static_dir: "./static".to_string(),
    }
}
