use chrono::Datelike;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub organization: String,
    pub country: String,
    pub bio: String,
    pub image_url: String,
    pub talk_title: String,
    pub year: i64,
    pub display_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSpeaker {
    pub name: String,
    pub designation: String,
    pub organization: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub talk_title: String,
    pub year: Option<i64>,
    #[serde(default)]
    pub display_order: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpeaker {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub organization: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub talk_title: Option<String>,
    pub year: Option<i64>,
    pub display_order: Option<i64>,
}

const SELECT_SPEAKER: &str = "SELECT id, name, designation, organization, country, bio, \
     image_url, talk_title, year, display_order, created_at, updated_at FROM speakers";

/// Newest edition first, then curated order, then name.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Speaker>, AppError> {
    let speakers = sqlx::query_as::<_, Speaker>(&format!(
        "{SELECT_SPEAKER} ORDER BY year DESC, display_order ASC, name ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(speakers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Speaker>, AppError> {
    let speaker = sqlx::query_as::<_, Speaker>(&format!("{SELECT_SPEAKER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(speaker)
}

pub async fn create(pool: &SqlitePool, new: &NewSpeaker) -> Result<Speaker, AppError> {
    let year = new
        .year
        .unwrap_or_else(|| i64::from(chrono::Utc::now().year()));
    let result = sqlx::query(
        "INSERT INTO speakers \
         (name, designation, organization, country, bio, image_url, talk_title, year, display_order) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.name)
    .bind(&new.designation)
    .bind(&new.organization)
    .bind(&new.country)
    .bind(&new.bio)
    .bind(&new.image_url)
    .bind(&new.talk_title)
    .bind(year)
    .bind(new.display_order)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(pool: &SqlitePool, id: i64, upd: &UpdateSpeaker) -> Result<Speaker, AppError> {
    let result = sqlx::query(
        "UPDATE speakers SET \
         name = COALESCE(?, name), \
         designation = COALESCE(?, designation), \
         organization = COALESCE(?, organization), \
         country = COALESCE(?, country), \
         bio = COALESCE(?, bio), \
         image_url = COALESCE(?, image_url), \
         talk_title = COALESCE(?, talk_title), \
         year = COALESCE(?, year), \
         display_order = COALESCE(?, display_order), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.name)
    .bind(&upd.designation)
    .bind(&upd.organization)
    .bind(&upd.country)
    .bind(&upd.bio)
    .bind(&upd.image_url)
    .bind(&upd.talk_title)
    .bind(upd.year)
    .bind(upd.display_order)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

/// Returns the number of rows removed (0 when the id was already gone).
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM speakers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
