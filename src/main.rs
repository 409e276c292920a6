use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_recommender_api::{
    artifacts::{load_catalog, load_similarity},
    middleware::cors_layer,
    routes::create_router,
    services::Dataset,
    state::AppState,
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (records, matrix) = tokio::try_join!(
        load_catalog(&config.movies_path),
        load_similarity(&config.similarity_path),
    )
    .context("Failed to load data artifacts")?;

    let dataset = Dataset::new(records, matrix).context("Failed to build movie dataset")?;
    let state = Arc::new(AppState::new(dataset, &config));

    let app = create_router(state).layer(cors_layer(&config.cors_origins));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
