use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::gateway::Gateway;
use crate::proxy::handlers;
use crate::quota::Clock;
use crate::upstream::GenerationBackend;

/// Axum application state. Holds no per-client data.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(backend: Arc<dyn GenerationBackend>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway: Gateway::new(backend), clock }
    }
}

/// `/api/generate` and `/api/quota` with state applied.
pub fn build_proxy_router(state: AppState) -> Router<()> {
    Router::new()
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/quota", get(handlers::handle_quota))
        .with_state(state)
}
