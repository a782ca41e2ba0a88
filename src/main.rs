mod api;
mod config;
mod error;
mod models;
mod services;
mod state;

use crate::config::Config;
use crate::services::MoodCatalog;
use crate::state::{spawn_rate_limiter_cleanup, AppState};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moodtunes=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Catalog is loaded once and never mutated afterwards
    let catalog = MoodCatalog::load(config.catalog_path.as_deref()).await?;
    tracing::info!("Moods available: {}", catalog.available_moods().join(", "));

    let app_state = Arc::new(AppState::new(&config, catalog));

    // Forget idle clients so the per-IP limiter map stays bounded
    let limiter_cleanup = spawn_rate_limiter_cleanup(
        app_state.rate_limiter.clone(),
        Duration::from_secs(config.rate_limit_window_secs.clamp(1, 60)),
    );

    let app = api::router(app_state)
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting MoodTunes API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    limiter_cleanup.abort();
    tracing::info!("Server stopped");
    Ok(())
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if config.allows_any_origin() {
        tracing::warn!("CORS allows any origin");
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {:?}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {:?}", e);
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
