use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::important_date::{self, NewImportantDate, UpdateImportantDate};
use crate::notify::{self, Notifier};

/// GET /api/admin/important-dates - List deadlines, pinned first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let dates = important_date::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(dates))
}

/// POST /api/admin/important-dates - Create a deadline entry.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewImportantDate>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.event, "Event", 300));
    errors.extend(validate::validate_required(&body.date, "Date", 100));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = important_date::create(&pool, &body).await?;
    notify::broadcast(&notifier, "important-dates", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/important-dates/{id} - Partially update a deadline entry.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateImportantDate>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(event) = &body.event {
        errors.extend(validate::validate_required(event, "Event", 300));
    }
    if let Some(date) = &body.date {
        errors.extend(validate::validate_required(date, "Date", 100));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = important_date::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "important-dates", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/important-dates/{id} - Remove a deadline entry. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = important_date::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "important-dates", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
