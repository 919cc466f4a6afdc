use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::news::{self, NewNewsItem, UpdateNewsItem};
use crate::notify::{self, Notifier};

/// GET /api/admin/news - List announcements, freshest first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let items = news::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /api/admin/news - Create an announcement.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewNewsItem>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 300));
    errors.extend(validate::validate_required(&body.body, "Body", 10_000));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = news::create(&pool, &body).await?;
    notify::broadcast(&notifier, "news", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/news/{id} - Partially update an announcement.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateNewsItem>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 300));
    }
    if let Some(news_body) = &body.body {
        errors.extend(validate::validate_required(news_body, "Body", 10_000));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = news::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "news", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/news/{id} - Remove an announcement. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = news::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "news", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
