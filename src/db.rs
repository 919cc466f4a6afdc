use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

use crate::models::committee::static_entries;

pub type DbPool = SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub async fn init_pool(database_url: &str) -> DbPool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("Failed to create DB pool")
}

pub async fn run_migrations(pool: &DbPool) {
    sqlx::raw_sql(MIGRATIONS)
        .execute(pool)
        .await
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Import the compiled-in committee entries as rows if the store has none.
/// After this one-time bootstrap the database copies are the ones shown and
/// edited; the aggregation's name dedup suppresses the compiled-in originals.
pub async fn seed_committees(pool: &DbPool) {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM committee_members")
        .fetch_one(pool)
        .await
        .expect("Failed to count committee members");
    if count > 0 {
        return;
    }

    // member_order follows list position so the seeded rows render in the
    // same order the compiled-in lists did.
    for (pos, entry) in static_entries::all().enumerate() {
        sqlx::query(
            "INSERT INTO committee_members \
             (name, designation, organization, member_type, member_order) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(entry.name)
        .bind(entry.designation)
        .bind(entry.organization)
        .bind(entry.member_type)
        .bind((pos + 1) as i64)
        .execute(pool)
        .await
        .expect("Failed to seed committee members");
    }
    log::info!(
        "Seeded {} committee members from the compiled-in lists",
        static_entries::all().count()
    );
}
