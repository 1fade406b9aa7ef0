//! PostgreSQL connectivity for the workspace.
//!
//! Features:
//! - `postgres` (default): SeaORM connector, migrations, health probe
//! - `config`: load [`postgres::PostgresConfig`] via `core_config::FromEnv`
//!
//! ```ignore
//! use database::{postgres, RetryConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_with_retry(config, RetryConfig::default()).await?;
//! postgres::run_migrations::<Migrator>(&db, "user_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
