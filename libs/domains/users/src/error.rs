use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::errors::{messages, ErrorResponse};
use axum_helpers::extractors::validated_json::validation_details;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Username '{0}' already exists")]
    UserNameTaken(String),

    #[error("Email '{0}' already exists")]
    EmailTaken(String),

    #[error("Invalid user status: '{0}'")]
    InvalidStatus(String),

    #[error("Invalid input")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// The conflicting field, for conflict variants.
    ///
    /// Both the pre-check path and the store-constraint path produce the same
    /// variants, so callers cannot tell which one detected the collision.
    pub fn conflict_field(&self) -> Option<&'static str> {
        match self {
            UserError::UserNameTaken(_) => Some("userName"),
            UserError::EmailTaken(_) => Some("email"),
            _ => None,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details, code) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("User {} not found", id),
                None,
                messages::CODE_NOT_FOUND,
            ),
            UserError::UserNameTaken(name) => {
                tracing::info!(user_name = %name, "Username conflict");
                (
                    StatusCode::CONFLICT,
                    "Conflict",
                    format!("Username '{}' already exists", name),
                    Some(json!({ "field": "userName" })),
                    messages::CODE_CONFLICT,
                )
            }
            UserError::EmailTaken(email) => {
                tracing::info!(email = %email, "Email conflict");
                (
                    StatusCode::CONFLICT,
                    "Conflict",
                    format!("Email '{}' already exists", email),
                    Some(json!({ "field": "email" })),
                    messages::CODE_CONFLICT,
                )
            }
            UserError::InvalidStatus(status) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                format!("User status must be 'A', 'I' or 'T', got '{}'", status),
                None,
                messages::CODE_VALIDATION,
            ),
            UserError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                messages::VALIDATION_FAILED.to_string(),
                Some(validation_details(errors)),
                messages::CODE_VALIDATION,
            ),
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    None,
                    messages::CODE_INTERNAL,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
            code: Some(code),
        });

        (status, body).into_response()
    }
}
