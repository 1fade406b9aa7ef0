//! Reusable OpenAPI error responses, shared by every documented endpoint.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the payload failed field validation",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Request validation failed",
        "details": {
            "user_name": [{
                "code": "length",
                "message": "userName must be between 4 and 255 characters",
                "params": {"value": "abc"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the path id is not an integer",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Invalid id: abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found - no row matches the requested id",
    content_type = "application/json",
    example = json!({
        "error": "NotFound",
        "message": "User 42 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - a unique field is already taken by another user",
    content_type = "application/json",
    example = json!({
        "error": "Conflict",
        "message": "Username 'johndoe' already exists",
        "details": { "field": "userName" }
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "InternalServerError",
        "message": "An unexpected error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
