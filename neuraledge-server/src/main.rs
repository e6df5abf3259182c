use anyhow::Context;
use neuraledge_server::{AppState, Config, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neuraledge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NeuralEdge catalog server...");

    let config = Config::from_env().context("Failed to read configuration")?;
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Catalog: {} (fallback {}), cache window {}s",
        config.catalog_path.display(),
        config.catalog_fallback_path.display(),
        config.cache_ttl.as_secs()
    );

    let addr = config.bind_addr.clone();
    let state = AppState::from_config(config);

    // Warm the cache so the first request does not pay for the load
    let snapshot = state.store.snapshot().await;
    if !snapshot.origin.is_real_data() {
        tracing::warn!("Serving sample data; no catalog file is readable");
    }

    // Build router with all API endpoints
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
