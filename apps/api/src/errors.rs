use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::candidate::store::StoreError;
use crate::candidate::validation::ValidationErrors;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Oracle and store failures carry the
    /// underlying message but are not otherwise told apart.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors.to_string(),
            AppError::Llm(e) => e.to_string(),
            AppError::Store(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();

        let body = match &self {
            AppError::Validation(errors) => json!({
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": message,
                    "fields": errors.errors,
                }
            }),
            AppError::Llm(_) | AppError::Store(_) => {
                tracing::error!("{self}");
                json!({
                    "error": {
                        "code": "INTERNAL_ERROR",
                        "message": message,
                    }
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
