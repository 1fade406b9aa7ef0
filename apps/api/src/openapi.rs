use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "REST API for managing users"
    ),
    servers((url = "/api", description = "API base path")),
    nest((path = "/users", api = domain_users::handlers::ApiDoc))
)]
pub struct ApiDoc;
