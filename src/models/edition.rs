use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

/// A previous edition of the conference (year, host city, theme).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PreviousEdition {
    pub id: i64,
    pub year: i64,
    pub location: String,
    pub theme: String,
    pub website_url: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPreviousEdition {
    pub year: i64,
    pub location: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub website_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreviousEdition {
    pub year: Option<i64>,
    pub location: Option<String>,
    pub theme: Option<String>,
    pub website_url: Option<String>,
}

const SELECT_EDITION: &str =
    "SELECT id, year, location, theme, website_url, created_at, updated_at FROM previous_editions";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<PreviousEdition>, AppError> {
    let editions =
        sqlx::query_as::<_, PreviousEdition>(&format!("{SELECT_EDITION} ORDER BY year DESC"))
            .fetch_all(pool)
            .await?;
    Ok(editions)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<PreviousEdition>, AppError> {
    let edition = sqlx::query_as::<_, PreviousEdition>(&format!("{SELECT_EDITION} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(edition)
}

pub async fn create(
    pool: &SqlitePool,
    new: &NewPreviousEdition,
) -> Result<PreviousEdition, AppError> {
    let result = sqlx::query(
        "INSERT INTO previous_editions (year, location, theme, website_url) VALUES (?, ?, ?, ?)",
    )
    .bind(new.year)
    .bind(&new.location)
    .bind(&new.theme)
    .bind(&new.website_url)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdatePreviousEdition,
) -> Result<PreviousEdition, AppError> {
    let result = sqlx::query(
        "UPDATE previous_editions SET \
         year = COALESCE(?, year), \
         location = COALESCE(?, location), \
         theme = COALESCE(?, theme), \
         website_url = COALESCE(?, website_url), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(upd.year)
    .bind(&upd.location)
    .bind(&upd.theme)
    .bind(&upd.website_url)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM previous_editions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
