pub mod handlers;
pub mod messages;
pub mod responses;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// This structure is returned for all error responses, providing consistent
/// error information to clients:
/// - `error`: Machine-readable error identifier (e.g., "Conflict")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., per-field validation errors)
/// - `code`: Optional integer error code for logging/monitoring
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Conflict",
///   "message": "Username 'johndoe' already exists",
///   "details": { "field": "userName" }
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Optional integer error code for logging and monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}
