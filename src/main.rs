//! Pokedex CLI - A command line Pokedex backed by the PokeAPI
//!
//! Looks up location areas and pokemon over HTTP and keeps every response
//! in a time-expiring in-memory cache.

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::repl::{self, ReplState};
use pokedex_cli::{Cache, Config, PokeApi};

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging on stderr
/// 2. Load configuration from environment variables
/// 3. Create the response cache and its background sweep task
/// 4. Create the PokeAPI client
/// 5. Run the REPL until `exit`, end of input or Ctrl+C
/// 6. Stop the cache and wait for the sweep task to finish
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    // Logs go to stderr so they never mix with the prompt on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting the Pokedex");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, http_timeout={}s, base_url={}",
        config.cache_ttl, config.http_timeout, config.base_url
    );

    // Create the shared response cache, which starts its own sweep task
    let cache = Cache::new(config.cache_interval());
    info!("Response cache initialized");

    let client = PokeApi::new(&config)?;
    let mut state = ReplState::new(cache, client);

    // Run the REPL until it ends on its own or a signal arrives
    let repl_result = tokio::select! {
        result = repl::run(&mut state) => result,
        _ = shutdown_signal() => Ok(()),
    };

    // Stop the sweep task before reporting any REPL error
    state.shutdown().await;
    info!("Pokedex closed");

    repl_result?;
    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
