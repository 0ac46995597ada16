// src/error.rs

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::response::CODE_ERROR;

/// Global Application Error Enum.
///
/// Clients never see an error payload: every failure flattens to the
/// `{"code": 400}` envelope on an HTTP 200 response. The variants exist so
/// the underlying cause can be logged before it is flattened.
#[derive(Debug)]
pub enum AppError {
    Database(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(msg) => tracing::error!("Database error: {}", msg),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }

        Json(json!({ "code": CODE_ERROR })).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::Database`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
