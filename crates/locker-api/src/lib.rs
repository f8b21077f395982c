#![allow(non_snake_case)]

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use error::ProxyError;
pub use state::AppState;

/// Host-side API surface: health check plus `/api/*` forwarding to the backend.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(axum::middleware::from_fn(middleware::auth::observe_bearer))
        .with_state(state)
}
