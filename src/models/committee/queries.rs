use sqlx::SqlitePool;

use super::types::{CommitteeMember, NewCommitteeMember, UpdateCommitteeMember};
use crate::errors::AppError;

const SELECT_MEMBER: &str = "SELECT id, name, designation, organization, member_type, \
     section_order, member_order, created_at, updated_at FROM committee_members";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<CommitteeMember>, AppError> {
    let members = sqlx::query_as::<_, CommitteeMember>(&format!(
        "{SELECT_MEMBER} ORDER BY section_order ASC, member_order ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(members)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<CommitteeMember>, AppError> {
    let member = sqlx::query_as::<_, CommitteeMember>(&format!("{SELECT_MEMBER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(member)
}

pub async fn create(
    pool: &SqlitePool,
    new: &NewCommitteeMember,
) -> Result<CommitteeMember, AppError> {
    let result = sqlx::query(
        "INSERT INTO committee_members \
         (name, designation, organization, member_type, section_order, member_order) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&new.name)
    .bind(&new.designation)
    .bind(&new.organization)
    .bind(&new.member_type)
    .bind(new.section_order)
    .bind(new.member_order)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdateCommitteeMember,
) -> Result<CommitteeMember, AppError> {
    let result = sqlx::query(
        "UPDATE committee_members SET \
         name = COALESCE(?, name), \
         designation = COALESCE(?, designation), \
         organization = COALESCE(?, organization), \
         member_type = COALESCE(?, member_type), \
         section_order = COALESCE(?, section_order), \
         member_order = COALESCE(?, member_order), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.name)
    .bind(&upd.designation)
    .bind(&upd.organization)
    .bind(&upd.member_type)
    .bind(upd.section_order)
    .bind(upd.member_order)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    find_by_id(pool, id).await?.ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM committee_members WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Remove every database member whose type equals `member_type` exactly
/// (case and whitespace sensitive). Static entries are untouched. Returns
/// the number of rows removed; a storage failure surfaces its raw message.
pub async fn delete_section(pool: &SqlitePool, member_type: &str) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM committee_members WHERE member_type = ?")
        .bind(member_type)
        .execute(pool)
        .await
        .map_err(|e| AppError::DeleteFailed(e.to_string()))?;
    Ok(result.rows_affected())
}
