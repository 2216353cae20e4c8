//! Feedback-specific error types.

use thiserror::Error;

/// Message shown to the user whenever the analysis round trip fails.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze sentiment. Please check the console for more details.";

/// Message shown when a failure carries no usable text.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred during analysis.";

/// Rejection of the feedback text at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackValidationError {
    #[error("Please enter some feedback to analyze.")]
    Blank,
}

/// Why a model reply could not be turned into an [`AnalysisResult`].
///
/// [`AnalysisResult`]: super::AnalysisResult
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl SchemaError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        SchemaError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Where in the round trip an analysis failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisErrorKind {
    /// The remote call itself failed (network, auth, rate limit, ...).
    Transport,
    /// The reply text was not JSON.
    Parse,
    /// The reply was JSON but did not match the declared shape.
    Schema,
}

/// Failure of the analysis client.
///
/// The display text is always the generic user-facing message; the cause is
/// logged where the error is created and only its kind is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AnalysisError {
    kind: AnalysisErrorKind,
    message: String,
}

impl AnalysisError {
    pub fn new(kind: AnalysisErrorKind) -> Self {
        Self {
            kind,
            message: ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn transport() -> Self {
        Self::new(AnalysisErrorKind::Transport)
    }

    /// Maps a schema failure onto the matching kind.
    pub fn from_schema(err: &SchemaError) -> Self {
        match err {
            SchemaError::InvalidJson(_) => Self::new(AnalysisErrorKind::Parse),
            _ => Self::new(AnalysisErrorKind::Schema),
        }
    }

    /// Replaces the user-facing message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> AnalysisErrorKind {
        self.kind
    }

    /// Text to show the user, falling back to the generic message when blank.
    pub fn user_message(&self) -> &str {
        if self.message.trim().is_empty() {
            UNKNOWN_FAILURE_MESSAGE
        } else {
            &self.message
        }
    }
}

/// Operations the workflow refuses in its current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("an analysis is already in progress")]
    SubmissionInFlight,

    #[error("feedback cannot be edited while an analysis is in progress")]
    InputLocked,
}

impl WorkflowError {
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            WorkflowError::InputLocked => "INPUT_LOCKED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_feedback_message_matches_form_copy() {
        assert_eq!(
            FeedbackValidationError::Blank.to_string(),
            "Please enter some feedback to analyze."
        );
    }

    #[test]
    fn every_analysis_error_kind_shows_the_same_message() {
        for kind in [
            AnalysisErrorKind::Transport,
            AnalysisErrorKind::Parse,
            AnalysisErrorKind::Schema,
        ] {
            assert_eq!(AnalysisError::new(kind).to_string(), ANALYSIS_FAILED_MESSAGE);
        }
    }

    #[test]
    fn invalid_json_maps_to_parse_kind() {
        let err = AnalysisError::from_schema(&SchemaError::InvalidJson("eof".into()));
        assert_eq!(err.kind(), AnalysisErrorKind::Parse);

        let err = AnalysisError::from_schema(&SchemaError::MissingField("sentiment"));
        assert_eq!(err.kind(), AnalysisErrorKind::Schema);
    }

    #[test]
    fn blank_message_falls_back_to_unknown_failure() {
        let err = AnalysisError::transport().with_message("  ");
        assert_eq!(err.user_message(), UNKNOWN_FAILURE_MESSAGE);
    }
}
