//! Caller service binary.
//!
//! ```text
//!     local client ── GET /caller/<route> ──▶ ┌─────────────┐ ── one request ──▶ receiver
//!                                             │   caller    │
//!     local client ◀── 200 + JSON envelope ── │   service   │ ◀── status + body ─
//!                                             └─────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use caller_service::config::load_config;
use caller_service::lifecycle::signals;
use caller_service::observability::{logging, metrics};
use caller_service::{HttpServer, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "caller-service", version, about = "Demo caller for the receiver service")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "CALLER_CONFIG", default_value = "config/caller.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args.config)?;

    logging::init(&config.observability.log_level);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config.display(),
        "caller-service starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        receiver = config.receiver.base_url.as_deref().unwrap_or("<per-scenario>"),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::trigger_on_signal(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
