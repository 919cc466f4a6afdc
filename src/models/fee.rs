use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

/// A registration-fee table row. Amounts are free-form strings so the
/// admin can enter "USD 250" or "Free" without a currency model.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFee {
    pub id: i64,
    pub category: String,
    pub audience: String,
    pub amount: String,
    pub late_amount: String,
    pub display_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistrationFee {
    pub category: String,
    #[serde(default)]
    pub audience: String,
    pub amount: String,
    #[serde(default)]
    pub late_amount: String,
    #[serde(default)]
    pub display_order: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationFee {
    pub category: Option<String>,
    pub audience: Option<String>,
    pub amount: Option<String>,
    pub late_amount: Option<String>,
    pub display_order: Option<i64>,
}

const SELECT_FEE: &str = "SELECT id, category, audience, amount, late_amount, display_order, \
     created_at, updated_at FROM registration_fees";

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<RegistrationFee>, AppError> {
    let fees = sqlx::query_as::<_, RegistrationFee>(&format!(
        "{SELECT_FEE} ORDER BY display_order ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(fees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<RegistrationFee>, AppError> {
    let fee = sqlx::query_as::<_, RegistrationFee>(&format!("{SELECT_FEE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(fee)
}

pub async fn create(pool: &SqlitePool, new: &NewRegistrationFee) -> Result<RegistrationFee, AppError> {
    let result = sqlx::query(
        "INSERT INTO registration_fees (category, audience, amount, late_amount, display_order) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.category)
    .bind(&new.audience)
    .bind(&new.amount)
    .bind(&new.late_amount)
    .bind(new.display_order)
    .execute(pool)
    .await?;

    find_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    upd: &UpdateRegistrationFee,
) -> Result<RegistrationFee, AppError> {
    let result = sqlx::query(
        "UPDATE registration_fees SET \
         category = COALESCE(?, category), \
         audience = COALESCE(?, audience), \
         amount = COALESCE(?, amount), \
         late_amount = COALESCE(?, late_amount), \
         display_order = COALESCE(?, display_order), \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?",
    )
    .bind(&upd.category)
    .bind(&upd.audience)
    .bind(&upd.amount)
    .bind(&upd.late_amount)
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
    let result = sqlx::query("DELETE FROM registration_fees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
