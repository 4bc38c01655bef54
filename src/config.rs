//! Configuration loading and constants.
//!
//! The service is configured entirely from the process environment. `AppConfig`
//! is built once at startup and handed to router construction; every setting
//! falls back to a documented default, so loading never fails.

use const_format::formatcp;
use serde::Serialize;

// =============================================================================
// Environment Variables
// =============================================================================

/// TCP port the listener binds
pub const ENV_PORT: &str = "PORT";

/// Service name embedded in every response
pub const ENV_APP_NAME: &str = "APP_NAME";

/// Service version embedded in every response
pub const ENV_APP_VERSION: &str = "APP_VERSION";

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_APP_NAME: &str = "go-demo-app";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Listen on all interfaces, the way the pod's container port expects
pub const DEFAULT_HOST: &str = "0.0.0.0";

// =============================================================================
// Routes
// =============================================================================

pub const ROUTE_HOME: &str = "/";
pub const ROUTE_HEALTH: &str = "/health";
pub const ROUTE_READY: &str = "/ready";
pub const ROUTE_INFO: &str = "/api/info";

/// Endpoint list announced at startup
pub const ENDPOINT_LIST: &str = formatcp!(
    "{}, {}, {}, {}",
    ROUTE_HOME,
    ROUTE_HEALTH,
    ROUTE_READY,
    ROUTE_INFO
);

// =============================================================================
// Response Constants
// =============================================================================

/// Greeting returned by `/api/info`
pub const INFO_MESSAGE: &str = "Hello from Kubernetes!";

pub const HEALTH_STATUS: &str = "healthy";
pub const READY_STATUS: &str = "ready";

/// Every body carries the request time, hostname or uptime, so nothing may be cached.
/// Probes in particular must always reach the process.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "kube_demo_app=info,tower_http=info";

/// Environment variable selecting the log format (text or json)
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Name and version of the running instance.
///
/// Read once from the environment and never changed afterwards; handlers only
/// ever see it through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceIdentity {
    pub name: String,
    pub version: String,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: String,
    /// Raw port value; validated when the listener address is built
    pub port: String,
}

impl HttpServerConfig {
    /// `host:port` string handed to the socket address parser
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http: HttpServerConfig,
    pub identity: ServiceIdentity,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset and empty values both fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, fallback: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            http: HttpServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: get(ENV_PORT, DEFAULT_PORT),
            },
            identity: ServiceIdentity {
                name: get(ENV_APP_NAME, DEFAULT_APP_NAME),
                version: get(ENV_APP_VERSION, DEFAULT_APP_VERSION),
            },
        }
    }

    /// Override the bind host (from the command line).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.http.host = host.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line, for log collectors
    Json,
}
