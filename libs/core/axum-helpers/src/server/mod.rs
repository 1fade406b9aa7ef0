//! Server bootstrap: router assembly with OpenAPI docs, liveness/readiness
//! endpoints, graceful shutdown, and connection cleanup.
//!
//! The usual wiring is `create_router` for the middleware-wrapped API
//! router, `health_router` merged on top, then `create_production_app` to
//! serve with a bounded cleanup phase.

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
