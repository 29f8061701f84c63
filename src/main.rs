// src/main.rs

use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

use mindful::api::http::http_router;
use mindful::config::CONFIG;
use mindful::state::AppState;

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(CONFIG.tracing_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Mindful backend");
    if CONFIG.jwt_secret.is_some() {
        info!("Identity: shared-secret HS256 tokens");
    } else if CONFIG.google_client_id.is_some() {
        info!("Identity: Google ID tokens");
    } else {
        warn!("No identity verifier configured, bearer tokens will be ignored");
    }
    info!("CORS origins: {}", CONFIG.cors_origins.join(", "));

    let app_state = Arc::new(AppState::from_config(CONFIG.clone())?);
    let app = http_router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
