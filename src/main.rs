//! MCP Server Entry Point
//!
//! Parses the command line, resolves the configuration, builds the server
//! and runs it on the configured transport until the client disconnects or
//! the process is asked to stop.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use aux_mcp_server::cli::{Cli, Command};
use aux_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let Command::Start(args) = cli.command;

    dotenvy::dotenv().ok();

    // The configured level is only known after loading, so warnings raised
    // while loading go through a temporary warn-level subscriber.
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        Config::load(args.overrides())
    });
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::from_config(&config);
    let server = McpServer::new(config)?;

    info!("Server initialized");

    tokio::select! {
        result = transport.run(server) => result?,
        _ = shutdown_signal() => info!("Shutdown signal received"),
    }

    info!("Server shutting down");

    Ok(())
}

/// Resolve when SIGINT or (on unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl_c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(e) => {
                error!("Failed to register SIGTERM handler: {}", e);
                ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}

/// Subscriber used while the configuration is loaded.
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    fmt()
        .with_max_level(Level::WARN)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish()
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout belongs to the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
