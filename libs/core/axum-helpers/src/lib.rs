//! # Axum Helpers
//!
//! Shared plumbing for the workspace's axum services.
//!
//! - **[`server`]**: router bootstrap with OpenAPI docs, health/readiness,
//!   graceful shutdown with a bounded cleanup phase
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: the `ErrorResponse` wire shape, reusable OpenAPI error
//!   responses, 404 fallback
//! - **[`extractors`]**: `IdPath` (integer path ids) and `ValidatedJson`
//!   (payload validation before the handler body runs)
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    close_postgres, create_app, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

pub use http::{allowed_origins_from_env, create_cors_layer, security_headers};

pub use errors::ErrorResponse;

pub use extractors::{IdPath, ValidatedJson};
