//! HTTP handlers for the feedback form and its JSON API.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use tokio::task::JoinHandle;

use crate::application::feedback::FeedbackController;
use crate::domain::feedback::{WorkflowError, WorkflowState};

use super::dto::{
    AnalyzeForm, AnalyzeRequest, ErrorResponse, FeedbackStateResponse, UpdateTextRequest,
};
use super::page::render_page;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FeedbackAppState {
    controller: FeedbackController,
}

impl FeedbackAppState {
    pub fn new(controller: FeedbackController) -> Self {
        Self { controller }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Browser form
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Render the form and current panel
pub async fn show_form(State(state): State<FeedbackAppState>) -> Html<String> {
    let snapshot = state.controller.snapshot().await;
    Html(render_page(&snapshot))
}

/// POST /analyze - Store the text and start an analysis in the background
pub async fn submit_form(
    State(state): State<FeedbackAppState>,
    Form(form): Form<AnalyzeForm>,
) -> Redirect {
    if let Err(e) = start_analysis(&state.controller, Some(form.feedback)).await {
        // The form is disabled while loading; a resubmission here is a stale page.
        tracing::debug!(error = %e, "Ignoring form submission");
    }
    Redirect::to("/")
}

/// POST /reset - Clear the form
pub async fn reset_form(State(state): State<FeedbackAppState>) -> Redirect {
    state.controller.reset().await;
    Redirect::to("/")
}

// ════════════════════════════════════════════════════════════════════════════
// JSON API
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/feedback - Current state
pub async fn get_state(State(state): State<FeedbackAppState>) -> Json<FeedbackStateResponse> {
    Json(state.controller.snapshot().await.into())
}

/// PUT /api/feedback/text - Replace the feedback text
pub async fn update_text(
    State(state): State<FeedbackAppState>,
    Json(req): Json<UpdateTextRequest>,
) -> Response {
    match state.controller.set_text(req.text).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_workflow_error(e),
    }
}

/// POST /api/feedback/analyze - Run an analysis and return the resulting state
///
/// The body is optional; when present it must be a valid `AnalyzeRequest`.
pub async fn analyze(State(state): State<FeedbackAppState>, body: Bytes) -> Response {
    let text = match parse_analyze_body(&body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    let handle = match start_analysis(&state.controller, text).await {
        Ok(handle) => handle,
        Err(e) => return handle_workflow_error(e),
    };

    if let Some(handle) = handle {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Analysis task failed to complete");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Analysis task failed")),
            )
                .into_response();
        }
    }

    let response: FeedbackStateResponse = state.controller.snapshot().await.into();
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/feedback/reset - Clear the form and return the resulting state
pub async fn reset(State(state): State<FeedbackAppState>) -> Json<FeedbackStateResponse> {
    state.controller.reset().await;
    Json(state.controller.snapshot().await.into())
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

async fn start_analysis(
    controller: &FeedbackController,
    text: Option<String>,
) -> Result<Option<JoinHandle<WorkflowState>>, WorkflowError> {
    controller.spawn_submission_with(text).await
}

/// An empty body means "analyze the stored text".
fn parse_analyze_body(body: &[u8]) -> Result<Option<String>, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<AnalyzeRequest>(body) {
        Ok(req) => Ok(req.text),
        Err(e) => {
            let status = if e.is_syntax() || e.is_eof() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            tracing::debug!(error = %e, "Rejecting analyze request body");
            Err((status, Json(ErrorResponse::invalid_body(e.to_string()))).into_response())
        }
    }
}

fn handle_workflow_error(e: WorkflowError) -> Response {
    (StatusCode::CONFLICT, Json(ErrorResponse::conflict(&e))).into_response()
}
