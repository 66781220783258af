//! skodad binary entry point.
//!
//! Wires the Skoda Connect client, collector and scheduler together and
//! runs the daily scrape loop until Ctrl+C or SIGTERM.

use clap::Parser;
use skodad::{Config, ConnectClient, LogSink, ScheduleTarget, Scheduler, VehicleCollector};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// skodad - Daily Skoda Connect telemetry scraper
#[derive(Parser, Debug)]
#[command(name = "skodad", version, about, long_about = None)]
struct Cli {
    /// Local wall-clock time of the daily scrape (HH:MM:SS)
    #[arg(
        long,
        value_name = "TIME",
        default_value_t = ScheduleTarget::default(),
        env = "SKODAD_SCHEDULE"
    )]
    schedule: ScheduleTarget,

    /// Base URL of the Skoda Connect API
    #[arg(
        long,
        value_name = "URL",
        default_value = skodad::api::DEFAULT_BASE_URL,
        env = "SKODAD_API_URL"
    )]
    api_url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skodad=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("skodad - Skoda Connect telemetry scraper");

    let cli = Cli::parse();

    // Credentials come from the environment only; missing ones are fatal
    // before any network activity.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration incomplete, exiting");
            std::process::exit(1);
        }
    };

    let client = match ConnectClient::new(cli.api_url, config.api_debug) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build API client, exiting");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        vin = %config.identity.vin,
        api_debug = config.api_debug,
        "Starting scraper"
    );

    let collector = VehicleCollector::new(client, config.identity, LogSink);
    let shutdown = CancellationToken::new();
    let scheduler = Scheduler::new(cli.schedule, collector, shutdown.clone());

    let runner = tokio::spawn(scheduler.run());

    tracing::info!("Press Ctrl+C to shutdown");
    shutdown_signal().await;
    shutdown.cancel();

    if let Err(e) = runner.await {
        tracing::error!(error = %e, "Scheduler task failed");
    }

    tracing::info!("Shutdown complete");
}

/// Setup graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }
}
