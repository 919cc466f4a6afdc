use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

/// Per-year submission/acceptance counters shown on the publications page.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicationStat {
    pub id: i64,
    pub year: i64,
    pub submitted: i64,
    pub accepted: i64,
    pub published: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublicationStat {
    pub year: i64,
    #[serde(default)]
    pub submitted: i64,
    #[serde(default)]
    pub accepted: i64,
    #[serde(default)]
    pub published: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicationStat {
    pub year: Option<i64>,
    pub submitted: Option<i64>,
    pub accepted: Option<i64>,
    pub published: Option<i64>,
}

const SELECT_STAT: &str =
    "SELECT id, year, submitted, accepted, published, created_at, updated_at FROM publication_stats";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<PublicationStat>, AppError> {
    let stats = sqlx::query_as::<_, PublicationStat>(&format!("{SELECT_STAT} ORDER BY year DESC"))
        .fetch_all(pool)
        .await?;
    Ok(stats)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<PublicationStat>, AppError> {
    let stat = sqlx::query_as::<_, PublicationStat>(&format!("{SELECT_STAT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(stat)
}

pub async fn create(
    pool: &SqlitePool,
    new: &NewPublicationStat,
) -> Result<PublicationStat, AppError> {
    let result = sqlx::query(
        "INSERT INTO publication_stats (year, submitted, accepted, published) VALUES (?, ?, ?, ?)",
    )
    .bind(new.year)
    .bind(new.submitted)
    .bind(new.accepted)
    .bind(new.published)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdatePublicationStat,
) -> Result<PublicationStat, AppError> {
    let result = sqlx::query(
        "UPDATE publication_stats SET \
         year = COALESCE(?, year), \
         submitted = COALESCE(?, submitted), \
         accepted = COALESCE(?, accepted), \
         published = COALESCE(?, published), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(upd.year)
    .bind(upd.submitted)
    .bind(upd.accepted)
    .bind(upd.published)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM publication_stats WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
