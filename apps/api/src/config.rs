use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Everything the binary reads from its environment, composed from the
/// shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env()?, // DATABASE_URL is required
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/users")),
                ("PORT", Some("9090")),
                ("APP_ENV", None::<&str>),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "user_api");
                assert_eq!(config.database.url, "postgresql://localhost/users");
                assert_eq!(config.server.port, 9090);
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }
}
