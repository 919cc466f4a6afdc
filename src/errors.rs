use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Hash(String),
    Validation(String),
    NotFound,
    EmailTaken,
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    RefreshMismatch,
    DeleteFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::EmailTaken => write!(f, "User already exists"),
            AppError::InvalidCredentials => write!(f, "Invalid email or password"),
            AppError::MissingToken => write!(f, "No refresh token provided"),
            AppError::InvalidToken => write!(f, "Invalid or expired token"),
            AppError::RefreshMismatch => write!(f, "Refresh token no longer valid"),
            AppError::DeleteFailed(msg) => write!(f, "Failed to delete section: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::EmailTaken => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken | AppError::RefreshMismatch => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Hash(_) | AppError::DeleteFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Bulk section delete surfaces the raw storage message
            AppError::DeleteFailed(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(json!({ "message": self.to_string() }))
            }
            AppError::Db(_) | AppError::Hash(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .json(json!({ "message": "Internal server error" }))
            }
            _ => HttpResponse::build(self.status_code())
                .json(json!({ "message": self.to_string() })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            // SQLite names the violated columns in the message, e.g.
            // "UNIQUE constraint failed: users.email"
            if db.is_unique_violation() {
                if db.message().contains("users.email") {
                    return AppError::EmailTaken;
                }
                if db.message().contains("conferences.conference_id") {
                    return AppError::Validation("Conference id already exists".to_string());
                }
            }
        }
        AppError::Db(e)
    }
}
