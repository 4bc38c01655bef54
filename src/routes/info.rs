//! JSON description of the serving instance.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::INFO_MESSAGE;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    /// Pod name when running in Kubernetes; empty if the lookup failed
    pub hostname: String,
    pub timestamp: DateTime<Utc>,
    pub message: &'static str,
}

/// Handler for `/api/info`.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let hostname = state.hostname();
    tracing::info!(hostname = %hostname, "Served request");

    Json(InfoResponse {
        name: state.identity.name.clone(),
        version: state.identity.version.clone(),
        hostname,
        timestamp: Utc::now(),
        message: INFO_MESSAGE,
    })
}
