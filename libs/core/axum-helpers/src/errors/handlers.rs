use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorResponse};

/// Router fallback: an [`ErrorResponse`]-shaped 404 for unknown routes, so
/// clients never see axum's plain-text default.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: messages::NOT_FOUND_RESOURCE.to_string(),
        details: None,
        code: Some(messages::CODE_NOT_FOUND),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
