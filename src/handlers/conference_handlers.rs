use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::conference::{self, NewConference, UpdateConference};
use crate::notify::{self, Notifier};

fn validate_new(body: &NewConference) -> Result<(), AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(
        &body.conference_id,
        "Conference id",
        100,
    ));
    errors.extend(validate::validate_required(&body.name, "Name", 300));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }
    Ok(())
}

/// GET /api/admin/conference-info - List all conference records.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conferences = conference::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(conferences))
}

/// GET /api/conference/{conference_id} - Fetch one record by its slug.
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let found = conference::find_by_conference_id(&pool, &path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(found))
}

/// POST /api/admin/conference-info - Create a conference record.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewConference>,
) -> Result<HttpResponse, AppError> {
    validate_new(&body)?;

    let created = conference::create(&pool, &body).await?;
    notify::broadcast(&notifier, "conference", "create");
    Ok(HttpResponse::Created().json(created))
}

/// POST /api/conference - Create or replace the record for a slug.
///
/// Existing slug keeps its row id; every other field is overwritten.
pub async fn upsert(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewConference>,
) -> Result<HttpResponse, AppError> {
    validate_new(&body)?;

    let saved = conference::upsert(&pool, &body).await?;
    notify::broadcast(&notifier, "conference", "update");
    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/admin/conference-info/{id} - Partially update a record by row id.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateConference>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(conference_id) = &body.conference_id {
        errors.extend(validate::validate_required(
            conference_id,
            "Conference id",
            100,
        ));
    }
    if let Some(name) = &body.name {
        errors.extend(validate::validate_required(name, "Name", 300));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = conference::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "conference", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/conference-info/{id} - Remove a record by row id.
/// Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = conference::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "conference", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
