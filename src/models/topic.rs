use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub display_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_order: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopic {
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i64>,
}

const SELECT_TOPIC: &str =
    "SELECT id, title, description, display_order, created_at, updated_at FROM topics";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Topic>, AppError> {
    let topics = sqlx::query_as::<_, Topic>(&format!(
        "{SELECT_TOPIC} ORDER BY display_order ASC, title ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(topics)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Topic>, AppError> {
    let topic = sqlx::query_as::<_, Topic>(&format!("{SELECT_TOPIC} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(topic)
}

pub async fn create(pool: &SqlitePool, new: &NewTopic) -> Result<Topic, AppError> {
    let result =
        sqlx::query("INSERT INTO topics (title, description, display_order) VALUES (?, ?, ?)")
            .bind(&new.title)
            .bind(&new.description)
            .bind(new.display_order)
            .execute(pool)
            .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(pool: &SqlitePool, id: i64, upd: &UpdateTopic) -> Result<Topic, AppError> {
    let result = sqlx::query(
        "UPDATE topics SET \
         title = COALESCE(?, title), \
         description = COALESCE(?, description), \
         display_order = COALESCE(?, display_order), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.title)
    .bind(&upd.description)
    .bind(upd.display_order)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM topics WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
