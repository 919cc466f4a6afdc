use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveItem {
    pub id: i64,
    pub year: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArchiveItem {
    pub year: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArchiveItem {
    pub year: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

const SELECT_ARCHIVE: &str =
    "SELECT id, year, title, description, url, created_at, updated_at FROM archive_items";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<ArchiveItem>, AppError> {
    let items =
        sqlx::query_as::<_, ArchiveItem>(&format!("{SELECT_ARCHIVE} ORDER BY year DESC, id ASC"))
            .fetch_all(pool)
            .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ArchiveItem>, AppError> {
    let item = sqlx::query_as::<_, ArchiveItem>(&format!("{SELECT_ARCHIVE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, new: &NewArchiveItem) -> Result<ArchiveItem, AppError> {
    let result = sqlx::query(
        "INSERT INTO archive_items (year, title, description, url) VALUES (?, ?, ?, ?)",
    )
    .bind(new.year)
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.url)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdateArchiveItem,
) -> Result<ArchiveItem, AppError> {
    let result = sqlx::query(
        "UPDATE archive_items SET \
         year = COALESCE(?, year), \
         title = COALESCE(?, title), \
         description = COALESCE(?, description), \
         url = COALESCE(?, url), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(upd.year)
    .bind(&upd.title)
    .bind(&upd.description)
    .bind(&upd.url)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM archive_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
