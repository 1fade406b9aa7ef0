use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;

/// Body of the liveness endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// A boxed dependency check, producing a string error on failure.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Run named dependency checks concurrently and aggregate a readiness body.
///
/// Every check lands in the response as `"connected"`/`"disconnected"`.
/// `Ok` carries 200 when everything passed, `Err` carries 503 otherwise, so
/// the caller can hand either straight back to axum.
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let (names, futures): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(futures).await;

    let mut body = serde_json::Map::new();
    let mut ready = true;

    for (name, result) in names.into_iter().zip(results) {
        let state = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!(check = name, error = %e, "Readiness check failed");
                ready = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(state));
    }

    body.insert(
        "status".to_string(),
        json!(if ready { "ready" } else { "not ready" }),
    );

    let payload = Json(Value::Object(body));
    if ready {
        Ok((StatusCode::OK, payload))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, payload))
    }
}

/// Liveness handler: 200 with the app's name and version whenever the
/// process is up. Store reachability belongs to the readiness endpoint.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Router exposing `/health`, fed by the binary's [`AppInfo`].
pub fn health_router(app: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app)
}
