use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::home_section::{self, NewHomeSection, UpdateHomeSection};
use crate::notify::{self, Notifier};

/// GET /api/admin/home-sections - List landing-page sections in display order.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let sections = home_section::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(sections))
}

/// POST /api/admin/home-sections - Create a landing-page section.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewHomeSection>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.slug, "Slug", 100));
    errors.extend(validate::validate_required(&body.heading, "Heading", 300));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = home_section::create(&pool, &body).await?;
    notify::broadcast(&notifier, "home-sections", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/home-sections/{id} - Partially update a section.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateHomeSection>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(slug) = &body.slug {
        errors.extend(validate::validate_required(slug, "Slug", 100));
    }
    if let Some(heading) = &body.heading {
        errors.extend(validate::validate_required(heading, "Heading", 300));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = home_section::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "home-sections", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/home-sections/{id} - Remove a section. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = home_section::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "home-sections", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
