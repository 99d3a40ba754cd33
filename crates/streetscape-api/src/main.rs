use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use streetscape_api::{cors_layer, create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "streetscape_api=info,streetscape_store=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        port = config.port,
        project = %config.project_name,
        "Starting Streetscape API server"
    );

    // State lives in memory only and resets on every restart
    let state = Arc::new(AppState::seeded(config.clone()));
    tracing::info!(images = state.image_store.len().await, "Seeded in-memory image store");

    let cors = cors_layer(&config.cors_origin)
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
