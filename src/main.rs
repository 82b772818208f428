//! lrucached - an in-memory LRU cache with TTL expiry, served over HTTP

use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lrucached::api::{create_router, AppState};
use lrucached::cache::{Cache, CacheStore};
use lrucached::config::Config;
use lrucached::tasks::spawn_sweeper;

/// Main entry point for the cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache engine with configured parameters
/// 4. Start the background TTL sweeper
/// 5. Create the Axum router with all endpoints
/// 6. Serve HTTP on the configured port
/// 7. On SIGINT/SIGTERM, shut the engine down, drain, and join the sweeper
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lrucached=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting lrucached");

    let config = Config::from_env();
    info!(
        max_size = config.max_size,
        default_ttl = ?config.default_ttl,
        sweep_interval = config.sweep_interval,
        port = config.server_port,
        "configuration loaded"
    );

    let cache = Cache::new(CacheStore::new(
        config.max_size,
        config.default_ttl.map(Duration::from_secs),
    ));

    let sweeper = spawn_sweeper(cache.clone(), Duration::from_secs(config.sweep_interval));

    let app = create_router(AppState::new(cache.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server port");
    info!("server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cache))
        .await
        .expect("server error");

    // The engine is already terminal; the sweeper drains on its own.
    let _ = sweeper.await;
    info!("server shutdown complete");
}

/// Waits for Ctrl+C or SIGTERM, then marks the engine terminal so the
/// sweeper and in-flight handlers wind down cooperatively.
async fn shutdown_signal(cache: Cache) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, initiating shutdown");
        }
        _ = terminate => {
            info!("received SIGTERM, initiating shutdown");
        }
    }

    cache.shutdown();
}
