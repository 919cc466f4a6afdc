use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::accepted_paper::{self, NewAcceptedPaper, UpdateAcceptedPaper};
use crate::notify::{self, Notifier};

/// GET /api/admin/accepted-papers - List accepted papers alphabetically.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let papers = accepted_paper::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(papers))
}

/// POST /api/admin/accepted-papers - Create an accepted-paper entry.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewAcceptedPaper>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.title, "Title", 500));
    errors.extend(validate::validate_required(&body.authors, "Authors", 1000));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = accepted_paper::create(&pool, &body).await?;
    notify::broadcast(&notifier, "accepted-papers", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/accepted-papers/{id} - Partially update an entry.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateAcceptedPaper>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(title) = &body.title {
        errors.extend(validate::validate_required(title, "Title", 500));
    }
    if let Some(authors) = &body.authors {
        errors.extend(validate::validate_required(authors, "Authors", 1000));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = accepted_paper::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "accepted-papers", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/accepted-papers/{id} - Remove an entry. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = accepted_paper::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "accepted-papers", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
