//! hello-docker: a greeting service for containers.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, builds the Axum router and runs the
//! HTTP server until a shutdown signal arrives.

use clap::Parser;

use hello_docker::config::AppConfig;
use hello_docker::http::start_server;
use hello_docker::logging::{init_tracing, select_log_filter};
use hello_docker::{create_router, AppError};

/// hello-docker: answers GET /hello with a fixed greeting
#[derive(Parser, Debug)]
#[command(name = "hello-docker", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Log level filter (e.g., "hello_docker=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config first: it decides the log format
    let config = AppConfig::resolve(args.config.as_deref())?;

    let log_filter = select_log_filter(args.log_level, std::env::var("RUST_LOG").ok());

    init_tracing(&log_filter, config.logging.format)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
