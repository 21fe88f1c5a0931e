use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handler;
use super::state::ProxyState;

/// Path the proxy answers on.
pub const PROXY_PATH: &str = "/api/hyperliquid";

/// Creates the proxy router.
pub fn create_router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route(PROXY_PATH, post(handler::forward))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
