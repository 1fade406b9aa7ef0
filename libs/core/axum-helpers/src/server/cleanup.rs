use tracing::{error, info};

/// Close a PostgreSQL connection during shutdown, logging the outcome.
///
/// Generic over the close future so this crate carries no SeaORM
/// dependency; pass `db.close()` from the binary.
///
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db.close(), "main").await;
/// ```
pub async fn close_postgres<E: std::fmt::Display>(
    close: impl std::future::Future<Output = Result<(), E>>,
    name: &str,
) {
    match close.await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
