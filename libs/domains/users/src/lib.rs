//! Users Domain
//!
//! CRUD over the `User` entity, with field-level payload validation and
//! username/email uniqueness enforcement. Uniqueness is pre-checked for
//! friendly field-attributed errors; the database unique indexes remain the
//! authority, and a write that loses the check-then-act race surfaces the
//! same conflict error the pre-check would have produced.
//!
//! Layering, top to bottom: `handlers` (HTTP endpoints) call the `service`
//! (business rules, validation sequencing, the uniqueness guard), which
//! talks to a `repository` (trait with in-memory and PostgreSQL
//! implementations) over the `models` types.
//!
//! ```rust,no_run
//! use domain_users::{handlers, repository::InMemoryUserRepository, service::UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{UserError, UserResult};
pub use models::{CreateUser, UpdateUser, User, UserStatus};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
