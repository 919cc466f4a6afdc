use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedPaper {
    pub id: i64,
    pub paper_code: String,
    pub title: String,
    pub authors: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAcceptedPaper {
    #[serde(default)]
    pub paper_code: String,
    pub title: String,
    pub authors: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcceptedPaper {
    pub paper_code: Option<String>,
    pub title: Option<String>,
    pub authors: Option<String>,
}

const SELECT_PAPER: &str =
    "SELECT id, paper_code, title, authors, created_at, updated_at FROM accepted_papers";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<AcceptedPaper>, AppError> {
    let papers = sqlx::query_as::<_, AcceptedPaper>(&format!("{SELECT_PAPER} ORDER BY title ASC"))
        .fetch_all(pool)
        .await?;
    Ok(papers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<AcceptedPaper>, AppError> {
    let paper = sqlx::query_as::<_, AcceptedPaper>(&format!("{SELECT_PAPER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(paper)
}

pub async fn create(pool: &SqlitePool, new: &NewAcceptedPaper) -> Result<AcceptedPaper, AppError> {
    let result =
        sqlx::query("INSERT INTO accepted_papers (paper_code, title, authors) VALUES (?, ?, ?)")
            .bind(&new.paper_code)
            .bind(&new.title)
            .bind(&new.authors)
            .execute(pool)
            .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdateAcceptedPaper,
) -> Result<AcceptedPaper, AppError> {
    let result = sqlx::query(
        "UPDATE accepted_papers SET \
         paper_code = COALESCE(?, paper_code), \
         title = COALESCE(?, title), \
         authors = COALESCE(?, authors), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.paper_code)
    .bind(&upd.title)
    .bind(&upd.authors)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM accepted_papers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
