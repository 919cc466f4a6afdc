use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::committee::{self, NewCommitteeMember, UpdateCommitteeMember};
use crate::notify::{self, Notifier};

/// GET /api/admin/committees - Raw member rows, placeholders included.
///
/// This is the admin editing view; the public page uses /aggregate.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let members = committee::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(members))
}

/// GET /api/committees/aggregate - Sectioned view with static entries
/// merged in, ready to render.
pub async fn aggregate(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let members = committee::find_all(&pool).await?;
    let sections = committee::aggregate_sections(&members);
    Ok(HttpResponse::Ok().json(sections))
}

/// POST /api/admin/committees - Create a member row.
///
/// An empty name is allowed; such a row is a section placeholder.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewCommitteeMember>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.member_type, "Type", 100));
    errors.extend(validate::validate_optional(&body.name, "Name", 200));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = committee::create(&pool, &body).await?;
    notify::broadcast(&notifier, "committees", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/committees/{id} - Partially update a member row.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateCommitteeMember>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(member_type) = &body.member_type {
        errors.extend(validate::validate_required(member_type, "Type", 100));
    }
    // Name stays optional on update too: clearing it turns the row into a
    // section placeholder.
    if let Some(name) = &body.name {
        errors.extend(validate::validate_optional(name, "Name", 200));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = committee::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "committees", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/committees/{id} - Remove a member row. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = committee::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "committees", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}

/// DELETE /api/admin/committees/section/{type} - Remove every row whose type
/// matches exactly. Static entries are untouched and will reappear.
pub async fn delete_section(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let member_type = path.into_inner();
    let removed = committee::delete_section(&pool, &member_type).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "committees", "delete");
    }
    log::info!("deleted committee section {member_type:?} ({removed} rows)");
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted", "removed": removed })))
}
