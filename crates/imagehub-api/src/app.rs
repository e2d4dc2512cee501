//! Application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use imagehub_core::config::AppConfig;
use imagehub_core::error::AppError;
use imagehub_operation::OperationFactory;
use imagehub_plugin::PluginCatalog;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Resolves drivers and plugins from `config` and builds the shared state.
pub async fn build_state(config: AppConfig, catalog: &PluginCatalog) -> Result<AppState, AppError> {
    let factory = OperationFactory::from_config(Arc::new(config), catalog).await?;
    Ok(AppState::new(factory))
}

/// Runs the ImageHub server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting ImageHub server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, &PluginCatalog::builtin()).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("ImageHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("ImageHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
