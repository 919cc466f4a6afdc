use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::speaker::{self, NewSpeaker, UpdateSpeaker};
use crate::notify::{self, Notifier};

/// GET /api/admin/speakers - List speakers, newest edition first.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let speakers = speaker::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(speakers))
}

/// POST /api/admin/speakers - Create a speaker.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewSpeaker>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.name, "Name", 200));
    errors.extend(validate::validate_required(&body.designation, "Designation", 200));
    errors.extend(validate::validate_required(&body.organization, "Organization", 200));
    if let Some(year) = body.year {
        errors.extend(validate::validate_year(year, "Year"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = speaker::create(&pool, &body).await?;
    notify::broadcast(&notifier, "speakers", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/speakers/{id} - Partially update a speaker.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateSpeaker>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(name) = &body.name {
        errors.extend(validate::validate_required(name, "Name", 200));
    }
    if let Some(designation) = &body.designation {
        errors.extend(validate::validate_required(designation, "Designation", 200));
    }
    if let Some(organization) = &body.organization {
        errors.extend(validate::validate_required(organization, "Organization", 200));
    }
    if let Some(year) = body.year {
        errors.extend(validate::validate_year(year, "Year"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = speaker::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "speakers", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/speakers/{id} - Remove a speaker. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = speaker::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "speakers", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
