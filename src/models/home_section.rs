use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HomeSection {
    pub id: i64,
    pub slug: String,
    pub heading: String,
    pub body: String,
    pub display_order: i64,
    pub is_visible: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHomeSection {
    pub slug: String,
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHomeSection {
    pub slug: Option<String>,
    pub heading: Option<String>,
    pub body: Option<String>,
    pub display_order: Option<i64>,
    pub is_visible: Option<bool>,
}

const SELECT_SECTION: &str = "SELECT id, slug, heading, body, display_order, is_visible, \
     created_at, updated_at FROM home_sections";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<HomeSection>, AppError> {
    let sections = sqlx::query_as::<_, HomeSection>(&format!(
        "{SELECT_SECTION} ORDER BY display_order ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(sections)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<HomeSection>, AppError> {
    let section = sqlx::query_as::<_, HomeSection>(&format!("{SELECT_SECTION} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(section)
}

pub async fn create(pool: &SqlitePool, new: &NewHomeSection) -> Result<HomeSection, AppError> {
    let result = sqlx::query(
        "INSERT INTO home_sections (slug, heading, body, display_order, is_visible) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.slug)
    .bind(&new.heading)
    .bind(&new.body)
    .bind(new.display_order)
    .bind(new.is_visible)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdateHomeSection,
) -> Result<HomeSection, AppError> {
    let result = sqlx::query(
        "UPDATE home_sections SET \
         slug = COALESCE(?, slug), \
         heading = COALESCE(?, heading), \
         body = COALESCE(?, body), \
         display_order = COALESCE(?, display_order), \
         is_visible = COALESCE(?, is_visible), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.slug)
    .bind(&upd.heading)
    .bind(&upd.body)
    .bind(upd.display_order)
    .bind(upd.is_visible)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM home_sections WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
