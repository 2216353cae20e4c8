//! HTTP DTOs for feedback endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::feedback::{score_bar_width, FeedbackSnapshot};
use crate::domain::feedback::{AnalysisResult, WorkflowError};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Browser form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub feedback: String,
}

/// Replace the feedback text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTextRequest {
    pub text: String,
}

/// Run an analysis, optionally replacing the text first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Analysis result as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResultResponse {
    pub sentiment: String,
    pub sentiment_score: f64,
    pub summary: String,
    pub key_themes: Vec<String>,
    pub score_bar_width: f64,
}

impl From<&AnalysisResult> for AnalysisResultResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            sentiment: result.sentiment.to_string(),
            sentiment_score: result.sentiment_score,
            summary: result.summary.clone(),
            key_themes: result.key_themes.clone(),
            score_bar_width: score_bar_width(result.sentiment_score),
        }
    }
}

/// Current form state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStateResponse {
    pub status: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResultResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub input_disabled: bool,
    pub trigger_disabled: bool,
    pub updated_at: String,
}

impl From<FeedbackSnapshot> for FeedbackStateResponse {
    fn from(snapshot: FeedbackSnapshot) -> Self {
        Self {
            status: snapshot.state.status().to_string(),
            result: snapshot.state.result().map(Into::into),
            error: snapshot.state.error().map(str::to_string),
            text: snapshot.text,
            input_disabled: snapshot.input_disabled,
            trigger_disabled: snapshot.trigger_disabled,
            updated_at: snapshot.updated_at.to_rfc3339(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn conflict(err: &WorkflowError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self {
            code: "INVALID_BODY".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
