use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, services::health::ReadinessStatus};

use super::model::ProbeStatus;

/// Liveness: the process is running. Never touches a dependency.
#[axum::debug_handler]
pub async fn live() -> impl IntoResponse {
    Json(ProbeStatus { status: "up" })
}

/// Readiness: a binary gate for load-balancer inclusion. The first failing
/// dependency turns the whole answer into a 503.
#[axum::debug_handler]
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.health.readiness().await {
        ReadinessStatus::Ready => (StatusCode::OK, Json(ProbeStatus { status: "ready" })),
        ReadinessStatus::StoreDown => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ProbeStatus { status: "db down" }),
        ),
        ReadinessStatus::CacheDown => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ProbeStatus { status: "redis down" }),
        ),
    }
}

/// Health: a diagnostic surface. Reports degradation, never refuses.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.health.health().await)
}
