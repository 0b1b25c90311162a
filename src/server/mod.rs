//! HTTP boundary for the tool directory.
//!
//! Thin glue over the directory mutations: four operations on the tool
//! collection, an admin secret check endpoint, and a health probe.

pub mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tool_store::ToolStorage;
use tooldir_auth::AdminSecret;
use tower_http::trace::TraceLayer;

/// Shared state for all handlers.
pub struct AppState {
    pub storage: Arc<dyn ToolStorage>,
    pub admin: AdminSecret,
}

/// Build the application router.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/auth", post(handlers::verify_admin))
        .route(
            "/api/tools",
            get(handlers::list_tools)
                .post(handlers::create_tool)
                .put(handlers::update_tool)
                .delete(handlers::delete_tool),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
