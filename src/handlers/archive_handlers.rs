use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::archive::{self, NewArchiveItem, UpdateArchiveItem};
use crate::notify::{self, Notifier};

/// GET /api/admin/archive - List archive entries, newest year first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let items = archive::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /api/admin/archive - Create an archive entry.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewArchiveItem>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_year(body.year, "Year"));
    errors.extend(validate::validate_required(&body.title, "Title", 300));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = archive::create(&pool, &body).await?;
    notify::broadcast(&notifier, "archive", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/archive/{id} - Partially update an archive entry.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateArchiveItem>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(year) = body.year {
        errors.extend(validate::validate_year(year, "Year"));
    }
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 300));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = archive::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "archive", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/archive/{id} - Remove an archive entry. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = archive::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "archive", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
