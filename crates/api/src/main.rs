//! Borrow Markets API server binary entrypoint.

use std::future::IntoFuture;
use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use markets_common::config::AppConfig;
use markets_feed::poller::CollateralFeed;

use markets_api::routes::create_router;
use markets_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                "markets_api=debug,markets_engine=debug,markets_feed=info,tower_http=debug",
            )
        }))
        .init();

    tracing::info!("Starting Borrow Markets API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Start the collateral feed
    let feed = CollateralFeed::new(&config.collateral_types_path, config.feed_poll_interval_ms)
        .with_cdp_types(config.cdp_types.clone());
    let state = AppState::new(feed.subscribe());

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = feed.run() => {
            tracing::warn!("Collateral feed stopped");
        }
        result = axum::serve(listener, app).into_future() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Borrow Markets API server stopped.");
    Ok(())
}
