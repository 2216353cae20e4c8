//! HTTP adapters - browser form and REST API.

pub mod feedback;

pub use feedback::{feedback_router, FeedbackAppState};

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::feedback::FeedbackController;
use crate::config::ServerConfig;

/// Builds the application router with tracing, timeout and CORS layers.
pub fn build_router(controller: FeedbackController, config: &ServerConfig) -> Router {
    feedback_router()
        .with_state(FeedbackAppState::new(controller))
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// `*` anywhere in the list allows every origin.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let configured = config.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if configured.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = configured
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
