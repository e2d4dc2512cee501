//! Route definitions for the ImageHub HTTP API.
//!
//! Image routes live under `/users/{owner}/images/{hash}`; `GET` routes also
//! answer `HEAD`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.server.max_upload_size_bytes).unwrap_or(usize::MAX);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(image_routes())
        .merge(service_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Image and metadata endpoints.
fn image_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{owner}/images/{hash}",
            get(handlers::image::get_image)
                .put(handlers::image::add_image)
                .delete(handlers::image::delete_image),
        )
        .route(
            "/users/{owner}/images/{hash}/meta",
            get(handlers::metadata::get_metadata)
                .post(handlers::metadata::edit_metadata)
                .put(handlers::metadata::edit_metadata)
                .delete(handlers::metadata::delete_metadata),
        )
}

/// Health and introspection endpoints.
fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/plugins", get(handlers::plugins::list_plugins))
}
