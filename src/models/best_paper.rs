use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BestPaper {
    pub id: i64,
    pub year: i64,
    pub title: String,
    pub authors: String,
    pub award: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBestPaper {
    pub year: i64,
    pub title: String,
    pub authors: String,
    #[serde(default)]
    pub award: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBestPaper {
    pub year: Option<i64>,
    pub title: Option<String>,
    pub authors: Option<String>,
    pub award: Option<String>,
}

const SELECT_BEST: &str =
    "SELECT id, year, title, authors, award, created_at, updated_at FROM best_papers";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<BestPaper>, AppError> {
    let papers =
        sqlx::query_as::<_, BestPaper>(&format!("{SELECT_BEST} ORDER BY year DESC, id ASC"))
            .fetch_all(pool)
            .await?;
    Ok(papers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<BestPaper>, AppError> {
    let paper = sqlx::query_as::<_, BestPaper>(&format!("{SELECT_BEST} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(paper)
}

pub async fn create(pool: &SqlitePool, new: &NewBestPaper) -> Result<BestPaper, AppError> {
    let result =
        sqlx::query("INSERT INTO best_papers (year, title, authors, award) VALUES (?, ?, ?, ?)")
            .bind(new.year)
            .bind(&new.title)
            .bind(&new.authors)
            .bind(&new.award)
            .execute(pool)
            .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(pool: &SqlitePool, id: i64, upd: &UpdateBestPaper) -> Result<BestPaper, AppError> {
    let result = sqlx::query(
        "UPDATE best_papers SET \
         year = COALESCE(?, year), \
         title = COALESCE(?, title), \
         authors = COALESCE(?, authors), \
         award = COALESCE(?, award), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(upd.year)
    .bind(&upd.title)
    .bind(&upd.authors)
    .bind(&upd.award)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM best_papers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
