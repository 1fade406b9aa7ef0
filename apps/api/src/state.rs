use domain_users::{PgUserRepository, UserService};

/// Shared state handed to request handlers. Cloning is cheap: the pool and
/// the service both wrap `Arc`s internally.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
    pub users: UserService<PgUserRepository>,
}
