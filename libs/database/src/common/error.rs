use thiserror::Error;

/// Errors produced by this crate's helpers.
///
/// Raw driver errors pass through as [`DatabaseError::Postgres`]; the
/// health probe attributes its failure explicitly so readiness reporting
/// can show a message without unwrapping driver internals.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
