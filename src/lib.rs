//! kube-demo-app: a small HTTP service for exercising Kubernetes deployments.
//!
//! Serves an HTML landing page, liveness and readiness probes, and a JSON
//! info endpoint, all derived from environment configuration and the pod
//! hostname.

pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::{AppConfig, ServiceIdentity};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
