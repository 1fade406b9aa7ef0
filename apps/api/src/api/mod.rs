use axum::Router;

pub mod health;
pub mod users;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// Router for `/ready`, which performs a real store reachability check.
/// Kept apart from the stateless liveness router so only this one carries
/// the app state.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
