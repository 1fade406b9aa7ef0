//! Environment-based configuration shared by every binary in the workspace.

pub mod server;
pub mod tracing;

use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment environment, selected by `APP_ENV`.
///
/// Anything other than `production` (case-insensitive) is treated as
/// development, so a missing or misspelled value can never silently turn on
/// production behavior like JSON logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application identity, reported by the liveness endpoint.
///
/// Construct with the [`app_info!`] macro so name and version come from the
/// binary's own Cargo metadata.
#[derive(Clone, Debug)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Configuration that can be loaded from environment variables.
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Read `key`, falling back to `default` when unset.
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read `key` or fail with [`ConfigError::MissingEnvVar`].
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            assert!(Environment::from_env().is_development());
        });
    }

    #[test]
    fn test_environment_production_any_casing() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert!(Environment::from_env().is_production());
            });
        }
    }

    #[test]
    fn test_environment_unknown_value_is_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert!(Environment::from_env().is_development());
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("SOME_KEY", Some("set"), || {
            assert_eq!(env_or_default("SOME_KEY", "fallback"), "set");
        });
        temp_env::with_var_unset("SOME_KEY", || {
            assert_eq!(env_or_default("SOME_KEY", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required() {
        temp_env::with_var("NEEDED", Some("value"), || {
            assert_eq!(env_required("NEEDED").unwrap(), "value");
        });
        temp_env::with_var_unset("NEEDED", || {
            let err = env_required("NEEDED").unwrap_err();
            assert!(err.to_string().contains("NEEDED"));
        });
    }
}
