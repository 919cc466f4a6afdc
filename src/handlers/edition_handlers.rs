use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::edition::{self, NewPreviousEdition, UpdatePreviousEdition};
use crate::notify::{self, Notifier};

/// GET /api/admin/previous-editions - List past editions, most recent first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let editions = edition::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(editions))
}

/// POST /api/admin/previous-editions - Create a past-edition entry.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewPreviousEdition>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_year(body.year, "Year"));
    errors.extend(validate::validate_required(&body.location, "Location", 200));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = edition::create(&pool, &body).await?;
    notify::broadcast(&notifier, "previous-editions", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/previous-editions/{id} - Partially update a past edition.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdatePreviousEdition>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(year) = body.year {
        errors.extend(validate::validate_year(year, "Year"));
    }
    if let Some(location) = &body.location {
        errors.extend(validate::validate_required(location, "Location", 200));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = edition::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "previous-editions", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/previous-editions/{id} - Remove a past edition. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = edition::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "previous-editions", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
