use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};
use serde_json::json;

use crate::auth::token;
use crate::config::Config;

/// Middleware for the admin scope: reads stay public, writes need a valid
/// Bearer access token. Tokens carry no role claim, so any signed-in
/// account may write; the one-time first-registrant-is-admin bootstrap is
/// the only role distinction the store records.
pub async fn require_auth_write(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if matches!(req.method().as_str(), "GET" | "HEAD" | "OPTIONS") {
        return next.call(req).await.map(|res| res.map_into_left_body());
    }

    let bearer = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string());

    let Some(bearer) = bearer.filter(|t| !t.is_empty()) else {
        let response =
            HttpResponse::Unauthorized().json(json!({ "message": "No token provided" }));
        return Ok(req.into_response(response).map_into_right_body());
    };

    let Some(config) = req.app_data::<web::Data<Config>>() else {
        log::error!("Config missing from app data");
        let response = HttpResponse::InternalServerError()
            .json(json!({ "message": "Internal server error" }));
        return Ok(req.into_response(response).map_into_right_body());
    };

    match token::verify_access(&config.access_secret, &bearer) {
        Ok(user_id) => {
            log::debug!("write authorized for user {user_id}");
            next.call(req).await.map(|res| res.map_into_left_body())
        }
        Err(_) => {
            let response = HttpResponse::Unauthorized()
                .json(json!({ "message": "Invalid or expired token" }));
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
