// GET handlers: capability listing, health, version, metrics

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::AppState;
use crate::error::ReportError;
use crate::{NAME, VERSION, now_rfc3339};

/// Success envelope shared by every /api/metrics endpoint.
#[derive(Serialize)]
struct Envelope<T> {
    success: bool,
    timestamp: String,
    data: T,
}

fn envelope<T: Serialize>(data: T) -> Response {
    Json(Envelope {
        success: true,
        timestamp: now_rfc3339(),
        data,
    })
    .into_response()
}

/// GET / — static capability listing.
pub(super) async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Host metrics API",
        "version": VERSION,
        "endpoints": {
            "health": "GET /health",
            "metrics": "GET /api/metrics",
            "system": "GET /api/metrics/system",
            "uptime": "GET /api/metrics/uptime",
            "network": "GET /api/metrics/network",
        },
        "timestamp": now_rfc3339(),
    }))
}

/// GET /health — liveness; touches no collaborator so it always answers 200.
pub(super) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": now_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs(),
    }))
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/metrics — full report.
pub(super) async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Response, ReportError> {
    let report = state.collector.collect().await?;
    Ok(envelope(&report))
}

/// GET /api/metrics/system — host, CPU, memory, disk and process sections.
pub(super) async fn system_handler(
    State(state): State<AppState>,
) -> Result<Response, ReportError> {
    let report = state.collector.collect().await?;
    Ok(envelope(report.system_view()))
}

/// GET /api/metrics/uptime
pub(super) async fn uptime_handler(
    State(state): State<AppState>,
) -> Result<Response, ReportError> {
    let report = state.collector.collect().await?;
    Ok(envelope(report.uptime_view()))
}

/// GET /api/metrics/network
pub(super) async fn network_handler(
    State(state): State<AppState>,
) -> Result<Response, ReportError> {
    let report = state.collector.collect().await?;
    Ok(envelope(report.network_view()))
}
