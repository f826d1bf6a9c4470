// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    ValidationError(#[from] validator::ValidationErrors),

    // Missing or malformed required input, with the field spelled out.
    #[error("{0}")]
    MissingField(&'static str),

    // The demo user lookup came back empty. Surfaced as a client error to
    // keep the original wire behavior.
    #[error("User not found")]
    UserNotFound,

    #[error("Client not found")]
    ClientNotFound,

    #[error("A timer session is already running")]
    TimerAlreadyRunning,

    #[error("No active timer session")]
    NoActiveTimer,

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    // Catch-all for anything unexpected; `anyhow` keeps the context.
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Return every validation detail, keyed by field.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MissingField(msg) => {
                let body = Json(json!({ "error": msg }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UserNotFound => (StatusCode::BAD_REQUEST, "User not found"),
            AppError::ClientNotFound => (StatusCode::BAD_REQUEST, "Client not found"),
            AppError::TimerAlreadyRunning => {
                (StatusCode::CONFLICT, "A timer session is already running")
            }
            AppError::NoActiveTimer => (StatusCode::BAD_REQUEST, "No active timer session"),

            // Everything else becomes a generic 500. The detailed message
            // goes to the log, not to the caller.
            ref e => {
                tracing::error!("Internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
