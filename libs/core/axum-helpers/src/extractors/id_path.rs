//! Integer id path parameter extractor with automatic validation.

use crate::errors::{messages, ErrorResponse};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Extractor for 64-bit integer id path parameters.
///
/// Automatically parses and validates the id from path parameters,
/// returning a structured 400 response if it is not an integer. Services
/// behind this extractor only ever see a well-formed `i64`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => {
                let body = ErrorResponse {
                    error: "BadRequest".to_string(),
                    message: format!("Invalid id: {}", raw),
                    details: None,
                    code: Some(messages::CODE_INVALID_ID),
                };
                Err((StatusCode::BAD_REQUEST, Json(body)).into_response())
            }
        }
    }
}
