use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub link: String,
    pub published_on: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsItem {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub link: String,
    /// Defaults to today when the admin does not backdate the item.
    pub published_on: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsItem {
    pub title: Option<String>,
    pub body: Option<String>,
    pub link: Option<String>,
    pub published_on: Option<String>,
}

const SELECT_NEWS: &str =
    "SELECT id, title, body, link, published_on, created_at, updated_at FROM news_items";

/// Freshest first; id breaks same-day ties so the latest insert leads.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<NewsItem>, AppError> {
    let items = sqlx::query_as::<_, NewsItem>(&format!(
        "{SELECT_NEWS} ORDER BY published_on DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<NewsItem>, AppError> {
    let item = sqlx::query_as::<_, NewsItem>(&format!("{SELECT_NEWS} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, new: &NewNewsItem) -> Result<NewsItem, AppError> {
    let published_on = new
        .published_on
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let result = sqlx::query(
        "INSERT INTO news_items (title, body, link, published_on) VALUES (?, ?, ?, ?)",
    )
    .bind(&new.title)
    .bind(&new.body)
    .bind(&new.link)
    .bind(&published_on)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(pool: &SqlitePool, id: i64, upd: &UpdateNewsItem) -> Result<NewsItem, AppError> {
    let result = sqlx::query(
        "UPDATE news_items SET \
         title = COALESCE(?, title), \
         body = COALESCE(?, body), \
         link = COALESCE(?, link), \
         published_on = COALESCE(?, published_on), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.title)
    .bind(&upd.body)
    .bind(&upd.link)
    .bind(&upd.published_on)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM news_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
