use anyhow::Result;
use tracing::info;

use persistence::{create_store, metrics::record_store_metrics};
use property_hub_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting Property Hub API v{}", env!("CARGO_PKG_VERSION"));

    let store = create_store(&config.data.store_config());
    let stats = store.stats().await;
    record_store_metrics(&stats);
    info!(
        users = stats.users,
        properties = stats.properties,
        service_requests = stats.service_requests,
        "Store ready"
    );

    let addr = config.socket_addr()?;
    let app = app::create_app(config, store);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
