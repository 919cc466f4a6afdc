use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ImportantDate {
    pub id: i64,
    pub event: String,
    pub date: String,
    pub is_pinned: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImportantDate {
    pub event: String,
    pub date: String,
    #[serde(default)]
    pub is_pinned: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImportantDate {
    pub event: Option<String>,
    pub date: Option<String>,
    pub is_pinned: Option<bool>,
}

const SELECT_DATE: &str =
    "SELECT id, event, date, is_pinned, created_at, updated_at FROM important_dates";

/// Pinned deadlines first, then chronological.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<ImportantDate>, AppError> {
    let dates = sqlx::query_as::<_, ImportantDate>(&format!(
        "{SELECT_DATE} ORDER BY is_pinned DESC, date ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(dates)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ImportantDate>, AppError> {
    let date = sqlx::query_as::<_, ImportantDate>(&format!("{SELECT_DATE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(date)
}

pub async fn create(pool: &SqlitePool, new: &NewImportantDate) -> Result<ImportantDate, AppError> {
    let result = sqlx::query("INSERT INTO important_dates (event, date, is_pinned) VALUES (?, ?, ?)")
        .bind(&new.event)
        .bind(&new.date)
        .bind(new.is_pinned)
        .execute(pool)
        .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdateImportantDate,
) -> Result<ImportantDate, AppError> {
    let result = sqlx::query(
        "UPDATE important_dates SET \
         event = COALESCE(?, event), \
         date = COALESCE(?, date), \
         is_pinned = COALESCE(?, is_pinned), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.event)
    .bind(&upd.date)
    .bind(upd.is_pinned)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM important_dates WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
