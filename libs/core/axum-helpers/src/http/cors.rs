use axum::http::{HeaderValue, Method};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Parse the `CORS_ALLOWED_ORIGIN` environment variable into an origin list.
///
/// The variable is required and holds comma-separated origins, e.g.
/// `http://localhost:4200` in development or
/// `https://example.com,https://app.example.com` in production. Failing fast
/// here keeps a misconfigured deployment from serving without CORS.
pub fn allowed_origins_from_env() -> io::Result<AllowOrigin> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. \
             Example: CORS_ALLOWED_ORIGIN=http://localhost:4200,https://example.com",
        )
    })?;

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    tracing::info!(origins = %raw, "CORS configured");
    Ok(AllowOrigin::list(origins))
}

/// CORS layer for the JSON API: the usual CRUD methods, JSON bodies, and a
/// one-hour preflight cache.
pub fn create_cors_layer(allowed_origins: impl Into<AllowOrigin>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_rejected() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let err = allowed_origins_from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }

    #[test]
    fn test_empty_list_is_rejected() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            assert!(allowed_origins_from_env().is_err());
        });
    }

    #[test]
    fn test_comma_separated_origins_parse() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:4200, https://example.com"),
            || {
                assert!(allowed_origins_from_env().is_ok());
            },
        );
    }
}
