use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::best_paper::{self, NewBestPaper, UpdateBestPaper};
use crate::notify::{self, Notifier};

/// GET /api/admin/best-papers - List award winners, newest year first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let papers = best_paper::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(papers))
}

/// POST /api/admin/best-papers - Create an award entry.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewBestPaper>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_year(body.year, "Year"));
    errors.extend(validate::validate_required(&body.title, "Title", 500));
    errors.extend(validate::validate_required(&body.authors, "Authors", 1000));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = best_paper::create(&pool, &body).await?;
    notify::broadcast(&notifier, "best-papers", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/best-papers/{id} - Partially update an award entry.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateBestPaper>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(year) = body.year {
        errors.extend(validate::validate_year(year, "Year"));
    }
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 500));
    }
    if let Some(authors) = &body.authors {
        errors.extend(validate::validate_required(authors, "Authors", 1000));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = best_paper::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "best-papers", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/best-papers/{id} - Remove an award entry. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = best_paper::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "best-papers", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
