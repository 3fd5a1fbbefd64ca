use std::{fmt::Display, sync::Arc};

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::auth::token::TokenKeys;
use crate::database::store::{Store, StoreError};

/** Used for storing the store handle and token keys when handling requests */
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub keys: TokenKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, keys: TokenKeys) -> Self {
        Self { store, keys }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            keys: self.keys.clone(),
        }
    }
}

/** Holds the errors we will use during request processing */
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing required input
    Validation(String),
    /// Missing, invalid or expired credential or token
    Authentication(String),
    /// Authenticated but not permitted
    Authorization(String),
    /// Well-formed reference, absent record
    NotFound,
    /// Malformed identifier
    InvalidReference,
    /// Duplicate unique field
    Conflict(String),
    /// Storage collaborator failure
    Storage(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => f.write_str(msg),
            AppError::Authentication(msg) => f.write_str(msg),
            AppError::Authorization(msg) => f.write_str(msg),
            AppError::NotFound => f.write_str("not found"),
            AppError::InvalidReference => f.write_str("malformed id"),
            AppError::Conflict(msg) => f.write_str(msg),
            AppError::Storage(msg) => f.write_str(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AppError::Validation(_) => actix_web::http::StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => actix_web::http::StatusCode::UNAUTHORIZED,
            // 401 rather than 403, matching the documented behavior
            AppError::Authorization(_) => actix_web::http::StatusCode::UNAUTHORIZED,
            AppError::NotFound => actix_web::http::StatusCode::NOT_FOUND,
            AppError::InvalidReference => actix_web::http::StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => actix_web::http::StatusCode::BAD_REQUEST,
            AppError::Storage(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage(msg) = self {
            log::error!("storage failure: {}", msg);
            return HttpResponse::build(self.status_code())
                .json(json!({ "error": "internal server error" }));
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Storage(format!("password hashing failed: {}", err))
    }
}

impl std::error::Error for AppError {}
