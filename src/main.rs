//! echo-status: a JSON status endpoint.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration from a TOML file (or built-in defaults), initializes tracing,
//! builds the Axum router and runs the HTTP server until a shutdown signal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use echo_status::config::{AppConfig, LoggingConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use echo_status::create_router;
use echo_status::http::start_server;

/// echo-status: answers every HTTP request with a JSON status payload
#[derive(Parser, Debug)]
#[command(name = "echo-status", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "echo_status=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config is loaded first because it selects the log format
    let explicit = args.config.is_some();
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let config = AppConfig::load_or_default(config_path, explicit)?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        path = %config_path,
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
