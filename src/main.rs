//! kube-demo-app entry point.
//!
//! Initializes tracing, loads configuration from the environment, builds the
//! Axum router and serves it until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kube_demo_app::clock::ProcessClock;
use kube_demo_app::config::{
    AppConfig, LogFormat, DEFAULT_HOST, DEFAULT_LOG_FILTER, ENDPOINT_LIST, ENV_LOG_FORMAT,
};
use kube_demo_app::http::start_server;
use kube_demo_app::templates::init_templates;
use kube_demo_app::{create_router, AppState};

/// A demo HTTP service for Kubernetes probes and load balancing.
///
/// PORT, APP_NAME and APP_VERSION are read from the environment.
#[derive(Parser, Debug)]
#[command(name = "kube-demo-app", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Log level filter (e.g., "kube_demo_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, env = ENV_LOG_FORMAT, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, args.log_format);

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let clock = ProcessClock::start();
    let config = AppConfig::from_env().with_host(args.host);

    let tera = init_templates()?;
    let state = AppState::new(config.identity.clone(), clock, tera);
    let app = create_router(state);

    tracing::info!(
        started_at = %clock.started_at().to_rfc3339(),
        "Starting {} v{} on {}",
        config.identity.name,
        config.identity.version,
        config.http.bind_address()
    );
    tracing::info!("Endpoints: {}", ENDPOINT_LIST);

    start_server(app, &config.http).await?;
    Ok(())
}
