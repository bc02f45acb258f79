//! Bookstore catalog and review service.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────┐
//!                     │                 BOOKSTORE                      │
//!   Client Request    │  ┌─────────┐    ┌──────────┐    ┌───────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│ handlers │───▶│   store   │  │
//!                     │  │ server  │    │ books/   │    │ Bookstore │  │
//!                     │  └─────────┘    │ users    │    │ catalog + │  │
//!                     │                 └────┬─────┘    │ users     │  │
//!                     │                      │          └───────────┘  │
//!                     │                      ▼                         │
//!                     │               ┌────────────┐                   │
//!                     │               │  upstream  │───────────────────┼──▶ Books API
//!                     │               │  (reqwest) │                   │
//!                     │               └────────────┘                   │
//!                     │  config · observability · lifecycle            │
//!                     └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use bookstore::config::resolve_config;
use bookstore::observability::{logging, metrics};
use bookstore::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(about = "Bookstore catalog and review service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("bookstore v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by validation.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
