use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

/// Conference metadata (dates, venue, theme), addressed two ways: by row id
/// through the admin CRUD, and by the stable `conference_id` slug through the
/// public upsert surface.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: i64,
    pub conference_id: String,
    pub name: String,
    pub theme: String,
    pub start_date: String,
    pub end_date: String,
    pub venue: String,
    pub city: String,
    pub country: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConference {
    pub conference_id: String,
    pub name: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConference {
    pub conference_id: Option<String>,
    pub name: Option<String>,
    pub theme: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

const SELECT_CONFERENCE: &str = "SELECT id, conference_id, name, theme, start_date, end_date, \
     venue, city, country, created_at, updated_at FROM conferences";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Conference>, AppError> {
    let conferences = sqlx::query_as::<_, Conference>(&format!("{SELECT_CONFERENCE} ORDER BY id ASC"))
        .fetch_all(pool)
        .await?;
    Ok(conferences)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Conference>, AppError> {
    let conference = sqlx::query_as::<_, Conference>(&format!("{SELECT_CONFERENCE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(conference)
}

pub async fn find_by_conference_id(
    pool: &SqlitePool,
    conference_id: &str,
) -> Result<Option<Conference>, AppError> {
    let conference =
        sqlx::query_as::<_, Conference>(&format!("{SELECT_CONFERENCE} WHERE conference_id = ?"))
            .bind(conference_id)
            .fetch_optional(pool)
            .await?;
    Ok(conference)
}

pub async fn create(pool: &SqlitePool, new: &NewConference) -> Result<Conference, AppError> {
    let result = sqlx::query(
        "INSERT INTO conferences \
         (conference_id, name, theme, start_date, end_date, venue, city, country) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.conference_id)
    .bind(&new.name)
    .bind(&new.theme)
    .bind(&new.start_date)
    .bind(&new.end_date)
    .bind(&new.venue)
    .bind(&new.city)
    .bind(&new.country)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

/// Create-or-replace keyed on `conference_id`: an existing row keeps its row
/// id and gets every field overwritten, otherwise a new row is inserted.
pub async fn upsert(pool: &SqlitePool, new: &NewConference) -> Result<Conference, AppError> {
    let result = sqlx::query(
        "UPDATE conferences SET \
         name = ?, theme = ?, start_date = ?, end_date = ?, \
         venue = ?, city = ?, country = ?, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE conference_id = ?",
    )
    .bind(&new.name)
    .bind(&new.theme)
    .bind(&new.start_date)
    .bind(&new.end_date)
    .bind(&new.venue)
    .bind(&new.city)
    .bind(&new.country)
    .bind(&new.conference_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return create(pool, new).await;
    }
    find_by_conference_id(pool, &new.conference_id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(pool: &SqlitePool, id: i64, upd: &UpdateConference) -> Result<Conference, AppError> {
    let result = sqlx::query(
        "UPDATE conferences SET \
         conference_id = COALESCE(?, conference_id), \
         name = COALESCE(?, name), \
         theme = COALESCE(?, theme), \
         start_date = COALESCE(?, start_date), \
         end_date = COALESCE(?, end_date), \
         venue = COALESCE(?, venue), \
         city = COALESCE(?, city), \
         country = COALESCE(?, country), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.conference_id)
    .bind(&upd.name)
    .bind(&upd.theme)
    .bind(&upd.start_date)
    .bind(&upd.end_date)
    .bind(&upd.venue)
    .bind(&upd.city)
    .bind(&upd.country)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM conferences WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
