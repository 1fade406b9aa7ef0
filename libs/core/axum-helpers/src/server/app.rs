use super::shutdown::{coordinated_shutdown, shutdown_signal, ShutdownCoordinator};
use crate::errors::handlers::not_found;
use crate::http::cors::{allowed_origins_from_env, create_cors_layer};
use crate::http::security::security_headers;
use axum::{middleware, Router};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, warn, Level};
use utoipa::OpenApi;

async fn bind(server_config: &ServerConfig) -> io::Result<TcpListener> {
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// The OpenAPI document served through all four UI flavors.
fn docs_router<T: OpenApi + 'static>() -> Router {
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
}

/// Serve `router` until SIGINT/SIGTERM, without a cleanup phase.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = bind(server_config).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| error!("Server error: {:?}", e))?;

    Ok(())
}

/// Assemble the standard router around an app's API routes.
///
/// Nests the routes under `/api`, mounts the OpenAPI docs, and applies the
/// common middleware stack: request tracing, security headers, CORS (from
/// the required `CORS_ALLOWED_ORIGIN` variable) and response compression.
/// Health endpoints are the app's to merge; see `health_router()`.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = create_cors_layer(allowed_origins_from_env()?);

    let router = docs_router::<T>()
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` with coordinated shutdown: on SIGINT/SIGTERM the listener
/// stops, in-flight requests drain, and `cleanup` (close pools, flush
/// buffers) gets at most `shutdown_timeout` to finish.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let listener = bind(server_config).await?;

    let signal_watch = coordinator.clone();
    let cleanup_task = tokio::spawn(async move {
        signal_watch.wait_for_signal().await;

        info!(?shutdown_timeout, "Running cleanup tasks");
        if tokio::time::timeout(shutdown_timeout, cleanup).await.is_err() {
            warn!(?shutdown_timeout, "Cleanup timed out, forcing shutdown");
        }
    });

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| error!("Server error: {:?}", e));

    cleanup_task.await.ok();

    served
}
