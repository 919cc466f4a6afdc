use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{password, token, validate};
use crate::config::Config;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for refresh and logout. The field is optional so an absent token
/// maps to `MissingToken` instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

fn auth_response(user: &user::User, access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "token": access,
        "refreshToken": refresh,
    })
}

/// POST /api/auth/register - Create an account and sign in.
///
/// The first account in an empty store becomes the admin.
pub async fn register(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.name, "Name", 100));
    errors.extend(validate::validate_email(&body.email));
    errors.extend(validate::validate_password(&body.password));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let hashed = password::hash_password(&body.password)?;
    let user_id = user::create(&pool, body.name.trim(), body.email.trim(), &hashed).await?;

    let access = token::mint_access(&config.access_secret, user_id)?;
    let refresh = token::mint_refresh(&config.refresh_secret, user_id)?;
    user::store_refresh_token(&pool, user_id, &refresh).await?;

    let created = user::find_by_id(&pool, user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    log::info!("registered user {} ({})", created.id, created.role);
    Ok(HttpResponse::Created().json(auth_response(&created, &access, &refresh)))
}

/// POST /api/auth/login - Verify credentials and issue a token pair.
///
/// An unknown email and a wrong password produce the same 401.
pub async fn login(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let existing = user::find_by_email(&pool, body.email.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if !password::verify_password(&body.password, &existing.password)? {
        return Err(AppError::InvalidCredentials);
    }

    let access = token::mint_access(&config.access_secret, existing.id)?;
    let refresh = token::mint_refresh(&config.refresh_secret, existing.id)?;
    user::store_refresh_token(&pool, existing.id, &refresh).await?;

    Ok(HttpResponse::Ok().json(auth_response(&existing, &access, &refresh)))
}

/// POST /api/auth/refresh - Rotate the refresh token, mint a new pair.
///
/// The presented token must both verify and match the stored slot; a token
/// that was already rotated away fails with 403 even though its signature
/// is still valid.
pub async fn refresh(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    body: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    let presented = body
        .refresh_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(AppError::MissingToken)?;
    let user_id = token::verify_refresh(&config.refresh_secret, presented)?;

    let new_refresh = token::mint_refresh(&config.refresh_secret, user_id)?;
    user::rotate_refresh_token(&pool, user_id, presented, &new_refresh).await?;
    let access = token::mint_access(&config.access_secret, user_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "token": access,
        "refreshToken": new_refresh,
    })))
}

/// POST /api/auth/logout - Invalidate the presented refresh token.
///
/// Always answers 200, even for an unknown or absent token.
pub async fn logout(
    pool: web::Data<DbPool>,
    body: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    if let Some(tok) = body.refresh_token.as_deref().filter(|t| !t.is_empty()) {
        user::clear_refresh_token(&pool, tok).await?;
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Logged out" })))
}
