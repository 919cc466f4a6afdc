use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::topic::{self, NewTopic, UpdateTopic};
use crate::notify::{self, Notifier};

/// GET /api/admin/topics - List call-for-papers topics in curated order.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let topics = topic::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(topics))
}

/// POST /api/admin/topics - Create a topic.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewTopic>,
) -> Result<HttpResponse, AppError> {
    if let Some(err) = validate::validate_required(&body.title, "Title", 300) {
        return Err(AppError::Validation(err));
    }

    let created = topic::create(&pool, &body).await?;
    notify::broadcast(&notifier, "topics", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/topics/{id} - Partially update a topic.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateTopic>,
) -> Result<HttpResponse, AppError> {
    if let Some(title) = &body.title {
        if let Some(err) = validate::validate_required(title, "Title", 300) {
            return Err(AppError::Validation(err));
        }
    }

    let updated = topic::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "topics", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/topics/{id} - Remove a topic. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = topic::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "topics", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
