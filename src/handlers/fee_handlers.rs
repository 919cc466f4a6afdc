use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::fee::{self, NewRegistrationFee, UpdateRegistrationFee};
use crate::notify::{self, Notifier};

/// GET /api/admin/registration-fees - List fee rows in table order.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let fees = fee::find_all(&pool).await?;
    Ok(HttpResponse::Ok().json(fees))
}

/// POST /api/admin/registration-fees - Create a fee row.
pub async fn create(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    body: web::Json<NewRegistrationFee>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.category, "Category", 200));
    errors.extend(validate::validate_required(&body.amount, "Amount", 100));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = fee::create(&pool, &body).await?;
    notify::broadcast(&notifier, "registration-fees", "create");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/admin/registration-fees/{id} - Partially update a fee row.
pub async fn update(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
    body: web::Json<UpdateRegistrationFee>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(category) = &body.category {
        errors.extend(validate::validate_required(category, "Category", 200));
    }
    if let Some(amount) = &body.amount {
        errors.extend(validate::validate_required(amount, "Amount", 100));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let updated = fee::update(&pool, path.into_inner(), &body).await?;
    notify::broadcast(&notifier, "registration-fees", "update");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/admin/registration-fees/{id} - Remove a fee row. Idempotent.
pub async fn delete(
    pool: web::Data<DbPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = fee::delete(&pool, path.into_inner()).await?;
    if removed > 0 {
        notify::broadcast(&notifier, "registration-fees", "delete");
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}
