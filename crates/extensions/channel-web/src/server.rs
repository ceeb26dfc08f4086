//! HTTP server and routing.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::WebChannelState;

/// Create the Axum router for the web channel.
pub fn create_router(state: Arc<WebChannelState>) -> Router {
    Router::new()
        // Composed page
        .route("/", get(serve_page))
        // Health check
        .route("/health", get(health_check))
        // API info
        .route("/api/info", get(api_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the composed page.
async fn serve_page(State(state): State<Arc<WebChannelState>>) -> impl IntoResponse {
    let page = state.render();
    debug!(
        project = %page.project(),
        fallback = page.selection.is_fallback(),
        "Rendered page"
    );
    Html(page.html)
}

/// Health check endpoint.
async fn health_check(State(state): State<Arc<WebChannelState>>) -> impl IntoResponse {
    let status = if state.started.load(Ordering::SeqCst) {
        "ok"
    } else {
        "starting"
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": status,
            "project": state.selection().project(),
        })),
    )
}

/// API info endpoint.
async fn api_info(State(state): State<Arc<WebChannelState>>) -> impl IntoResponse {
    let registry = state.renderer.registry();
    let selection = state.selection();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "name": "Showcase",
            "version": env!("CARGO_PKG_VERSION"),
            "project": selection.project(),
            "fallback": selection.is_fallback(),
            "default": registry.default_project(),
            "projects": registry.list_ids(),
            "endpoints": {
                "page": "/",
                "health": "/health",
                "info": "/api/info"
            }
        })),
    )
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
