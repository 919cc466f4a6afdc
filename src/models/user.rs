use sqlx::SqlitePool;

use crate::errors::AppError;

/// Internal user struct for authentication. Never serialized to clients;
/// handlers build their own response shapes without the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub refresh_token: Option<String>,
}

const SELECT_USER: &str =
    "SELECT id, name, email, password, role, refresh_token FROM users";

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Insert a new user and return its id. The first user in an empty store
/// becomes an admin; everyone after that is a plain user. A duplicate email
/// surfaces as `EmailTaken` via the unique constraint.
pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO users (name, email, password, role) \
         VALUES (?, ?, ?, \
                 CASE WHEN EXISTS (SELECT 1 FROM users) THEN 'user' ELSE 'admin' END)",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Overwrite the user's single refresh-token slot.
pub async fn store_refresh_token(
    pool: &SqlitePool,
    user_id: i64,
    token: &str,
) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE users SET refresh_token = ?, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') WHERE id = ?",
    )
    .bind(token)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Compare-and-swap rotation: the new token is written only if the stored
/// slot still holds the presented one. When two refreshes race on the same
/// token, exactly one update matches; the loser gets `RefreshMismatch`.
pub async fn rotate_refresh_token(
    pool: &SqlitePool,
    user_id: i64,
    presented: &str,
    new_token: &str,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE users SET refresh_token = ?, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ? AND refresh_token = ?",
    )
    .bind(new_token)
    .bind(user_id)
    .bind(presented)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::RefreshMismatch);
    }
    Ok(())
}

/// Clear the slot of whichever user holds this refresh token. Finding no
/// match is not an error; logout is idempotent.
pub async fn clear_refresh_token(pool: &SqlitePool, token: &str) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE users SET refresh_token = NULL, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') WHERE refresh_token = ?",
    )
    .bind(token)
    .execute(pool)
    .await?;
    Ok(())
}

