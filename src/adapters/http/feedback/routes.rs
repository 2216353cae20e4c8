//! Axum router configuration for feedback endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    analyze, get_state, health, reset, reset_form, show_form, submit_form, update_text,
    FeedbackAppState,
};

/// Browser-facing routes.
///
/// - `GET /` - Form and current panel
/// - `POST /analyze` - Submit the form
/// - `POST /reset` - Clear the form
pub fn form_routes() -> Router<FeedbackAppState> {
    Router::new()
        .route("/", get(show_form))
        .route("/analyze", post(submit_form))
        .route("/reset", post(reset_form))
}

/// JSON API routes, mounted under `/api/feedback`.
///
/// - `GET /` - Current state
/// - `PUT /text` - Replace the text
/// - `POST /analyze` - Run an analysis and wait for it
/// - `POST /reset` - Clear the form
pub fn api_routes() -> Router<FeedbackAppState> {
    Router::new()
        .route("/", get(get_state))
        .route("/text", put(update_text))
        .route("/analyze", post(analyze))
        .route("/reset", post(reset))
}

/// Complete feedback router.
///
/// # Example
///
/// ```ignore
/// let app = feedback_router().with_state(FeedbackAppState::new(controller));
/// ```
pub fn feedback_router() -> Router<FeedbackAppState> {
    Router::new()
        .merge(form_routes())
        .nest("/api/feedback", api_routes())
        .route("/health", get(health))
}
