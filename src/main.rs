// src/main.rs

//! clubwire service entry point.
//!
//! Wires the store, the background sync scheduler, and the read API
//! together, and tears them down in order on SIGINT/SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;

use clubwire::api;
use clubwire::config::Config;
use clubwire::error::Result;
use clubwire::feed::HttpFeedClient;
use clubwire::storage::{NewsStore, PgStore};
use clubwire::sync::SyncScheduler;

/// clubwire - Club News Sync Service
#[derive(Parser, Debug)]
#[command(name = "clubwire", version, about = "Club news feed sync service")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Address to bind the read API to (overrides the config file)
    #[arg(long, env = "CLUBWIRE_BIND")]
    bind: Option<String>,

    /// Postgres connection string (overrides the config file)
    #[arg(long, env = "CLUBWIRE_STORE_URL")]
    store_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("clubwire starting...");

    let mut config = Config::load_or_default(&cli.config);
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(url) = cli.store_url {
        config.store.url = url;
    }
    config.validate()?;

    // Setup failures here are fatal; everything after this point is retried
    // on the next cycle instead.
    let store: Arc<dyn NewsStore> = Arc::new(PgStore::connect(&config.store.url).await?);
    log::info!("connected to store");

    let feed = Arc::new(HttpFeedClient::new(&config.feed)?);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = SyncScheduler::new(
        feed,
        store.clone(),
        Duration::from_secs(config.sync.interval_secs),
        config.feed.count,
    );
    let sync_task = tokio::spawn(scheduler.run(shutdown_rx));

    let app = api::router(store);
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    log::info!("read API listening on {}", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the background sync and wait out its in-flight cycle.
    let _ = shutdown_tx.send(true);
    let _ = sync_task.await;

    log::info!("clubwire stopped");
    Ok(())
}

/// Resolves when the process receives a termination signal.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => log::info!("received SIGTERM"),
            _ = sigint.recv() => log::info!("received SIGINT"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
        log::info!("received ctrl-c");
    }
}
