//! Liveness and readiness endpoints for container orchestration.
//!
//! `/health` is the liveness probe: it answers as long as the process can
//! serve HTTP and reports how long it has been up. `/ready` is the readiness
//! probe. The service has no dependencies to wait for, so it is ready as soon
//! as it is listening.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::format_uptime;
use crate::config::{HEALTH_STATUS, READY_STATUS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Time since process start, e.g. `1h2m3.5s`
    pub uptime: String,
    pub checked: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
}

/// Liveness probe handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
        uptime: format_uptime(state.clock.uptime()),
        checked: Utc::now(),
    })
}

/// Readiness probe handler. Always ready.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: READY_STATUS,
    })
}
