use anyhow::Context;
use clap::Parser;
use quote_server::config::{listen_addr, Config};
use quote_server::quotes::corpus::{QUOTES, QUOTES_KEY};
use quote_server::quotes::handlers::router;
use quote_server::quotes::seeder::seed;
use quote_server::quotes::selector::QuoteSelector;
use quote_server::store::{ListStore, RedisStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    tracing::info!("Quote server is waking up...");

    // 1. Store connection (one per process):
    let redis = RedisStore::connect(&config.redis_addr, config.redis_connect_timeout)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to store at {} within {:?}",
                config.redis_addr, config.redis_connect_timeout
            )
        })?;
    let store: Arc<dyn ListStore> = Arc::new(redis);

    // 2. Seeding must finish before anything is served:
    seed(store.as_ref(), QUOTES_KEY, QUOTES)
        .await
        .context("Failed to seed quotes into the store")?;

    // 3. HTTP Router:
    let selector = Arc::new(QuoteSelector::new(store.clone(), QUOTES_KEY));
    let app = router(store.clone(), selector);

    // 4. Start HTTP server:
    let bind_addr = listen_addr(&config.listen_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr.as_str())
        .await
        .with_context(|| format!("Failed to listen on {}", bind_addr))?;

    tracing::info!("Starting HTTP server on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // The router and its handlers are gone, so this is the last handle on the connection.
    drop(store);
    tracing::info!("Store connection released, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
