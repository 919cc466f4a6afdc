use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::publication_stat::{self, NewPublicationStat, UpdatePublicationStat};
use crate::notify::{self, Notifier};

/// GET /api/admin/publication-stats - List per-year counters, newest first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let stats = publication_stat::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// POST /api/admin/publication-stats - Create a per-year counter row.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewPublicationStat>,
) -> Result<HttpResponse, AppError> {
    if let Some(err) = validate::validate_year(body.year, "Year") {
        return Err(AppError::Validation(err));
    }

    let created = publication_stat::create(&pool, &body).await?;
    notify::broadcast(&notifier, "publication-stats", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/publication-stats/{id} - Partially update a counter row.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdatePublicationStat>,
) -> Result<HttpResponse, AppError> {
    if let Some(year) = body.year {
        if let Some(err) = validate::validate_year(year, "Year") {
            return Err(AppError::Validation(err));
        }
    }

    let updated = publication_stat::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "publication-stats", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/publication-stats/{id} - Remove a counter row. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = publication_stat::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "publication-stats", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
