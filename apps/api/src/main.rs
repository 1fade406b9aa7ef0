use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::{postgres, RetryConfig};
use domain_users::{PgUserRepository, UserService};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The database container often comes up after the API; retry before
    // giving up on startup.
    let db = postgres::connect_with_retry(config.database.clone(), RetryConfig::default())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Schema must be current before the first request is served
    postgres::run_migrations::<migration::Migrator>(&db, "user_api")
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let users = UserService::new(PgUserRepository::new(db.clone()));
    let state = AppState { config, db, users };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state)).await?;

    // /health reports liveness; /ready pings the store through the service
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting user API with graceful shutdown (30s timeout)");

    let cleanup_db = state.db.clone();
    create_production_app(app, &state.config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        close_postgres(cleanup_db.close(), "main").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User API shutdown complete");
    Ok(())
}
