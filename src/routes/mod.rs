// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

use crate::collector::Collector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<Collector>,
    pub(crate) started_at: Instant,
}

pub fn app(collector: Arc<Collector>) -> Router {
    let state = AppState {
        collector,
        started_at: Instant::now(),
    };
    Router::new()
        .route("/", get(http::root_handler)) // GET /
        .route("/health", get(http::health_handler)) // GET /health
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/metrics", get(http::metrics_handler)) // GET /api/metrics
        .route("/api/metrics/system", get(http::system_handler)) // GET /api/metrics/system
        .route("/api/metrics/uptime", get(http::uptime_handler)) // GET /api/metrics/uptime
        .route("/api/metrics/network", get(http::network_handler)) // GET /api/metrics/network
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
