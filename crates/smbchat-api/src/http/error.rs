//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use smbchat_core::chat::ChatError;

#[derive(Debug)]
pub enum AppError {
    /// A failed chat operation.
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Chat(ChatError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Chat(ChatError::Session(e)) => {
                (StatusCode::FORBIDDEN, "INFO_NOT_COLLECTED", e.to_string())
            }
            AppError::Chat(ChatError::Retrieval(e)) => {
                tracing::error!(error = %e, "retrieval engine failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "RETRIEVAL_ERROR",
                    "The assistant is unavailable right now. Please try again shortly.".to_string(),
                )
            }
            AppError::Chat(ChatError::Store(e)) => {
                tracing::error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Your message could not be saved.".to_string(),
                )
            }
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
