//! Home page handler.
//!
//! Renders an HTML card with the service identity, the pod hostname and the
//! request time. Refreshing it behind a Service shows which replica answered.

use axum::{extract::State, response::Html};
use chrono::{SecondsFormat, Utc};

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::INDEX_TEMPLATE;

/// Home page handler. Also serves as the fallback for unknown paths.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let hostname = state.hostname();
    let request_time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut context = tera::Context::new();
    context.insert("identity", state.identity.as_ref());
    context.insert("hostname", &hostname);
    context.insert("request_time", &request_time);

    let html = state.tera.render(INDEX_TEMPLATE, &context)?;

    tracing::info!(hostname = %hostname, "Served request");
    Ok(Html(html))
}
