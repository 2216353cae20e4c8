//! Workflow state machine for a single feedback form.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::WorkflowError;
use super::input::FeedbackInput;
use super::sentiment::AnalysisResult;

/// Where the form currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// Nothing submitted yet, or reset.
    Idle,
    /// A request is outstanding.
    Loading,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl WorkflowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowState::Loading)
    }

    /// Lower-case name of the state, as exposed by the JSON API.
    pub fn status(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Loading => "loading",
            WorkflowState::Succeeded(_) => "succeeded",
            WorkflowState::Failed(_) => "failed",
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            WorkflowState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A submission accepted by [`FeedbackSession::begin_submission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub request_id: Uuid,
    pub text: String,
}

/// Result of asking the session to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The session moved to `Loading`; the caller must run the analysis.
    Started(Submission),
    /// The text was blank; the session moved straight to `Failed`.
    Rejected,
}

/// Text plus workflow state, mutated only through these methods.
///
/// Every submission and every reset advances `generation`. A completion is
/// applied only if it carries the current generation, so a reply that lands
/// after a reset (or after a newer submission) is dropped.
#[derive(Debug, Clone)]
pub struct FeedbackSession {
    input: FeedbackInput,
    state: WorkflowState,
    generation: u64,
    updated_at: DateTime<Utc>,
}

impl Default for FeedbackSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackSession {
    pub fn new() -> Self {
        Self {
            input: FeedbackInput::default(),
            state: WorkflowState::Idle,
            generation: 0,
            updated_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Editing is locked while a request is outstanding.
    pub fn input_disabled(&self) -> bool {
        self.state.is_loading()
    }

    /// The trigger is also unavailable for blank text.
    pub fn trigger_disabled(&self) -> bool {
        self.state.is_loading() || self.input.is_blank()
    }

    pub fn set_text(&mut self, value: impl Into<String>) -> Result<(), WorkflowError> {
        if self.input_disabled() {
            return Err(WorkflowError::InputLocked);
        }
        self.input.set_text(value);
        Ok(())
    }

    pub fn begin_submission(&mut self) -> Result<SubmissionOutcome, WorkflowError> {
        if self.state.is_loading() {
            return Err(WorkflowError::SubmissionInFlight);
        }

        let text = match self.input.submittable() {
            Ok(text) => text.to_string(),
            Err(err) => {
                self.transition(WorkflowState::Failed(err.to_string()));
                return Ok(SubmissionOutcome::Rejected);
            }
        };

        self.generation += 1;
        self.transition(WorkflowState::Loading);

        Ok(SubmissionOutcome::Started(Submission {
            generation: self.generation,
            request_id: Uuid::new_v4(),
            text,
        }))
    }

    /// Applies a finished analysis. Returns `false` if it was stale.
    pub fn complete(&mut self, generation: u64, outcome: Result<AnalysisResult, String>) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            return false;
        }

        let next = match outcome {
            Ok(result) => WorkflowState::Succeeded(result),
            Err(message) => WorkflowState::Failed(message),
        };
        self.transition(next);
        true
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.generation += 1;
        self.transition(WorkflowState::Idle);
    }

    fn transition(&mut self, next: WorkflowState) {
        self.state = next;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::Sentiment;

    fn sample_result() -> AnalysisResult {
        AnalysisResult::new(
            Sentiment::Positive,
            0.9,
            "Customer praised fast delivery and service.",
            vec!["delivery speed".to_string(), "service quality".to_string()],
        )
    }

    fn started(session: &mut FeedbackSession) -> Submission {
        match session.begin_submission().unwrap() {
            SubmissionOutcome::Started(submission) => submission,
            SubmissionOutcome::Rejected => panic!("expected submission to start"),
        }
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = FeedbackSession::new();
        assert_eq!(session.state(), &WorkflowState::Idle);
        assert_eq!(session.text(), "");
        assert!(!session.input_disabled());
        assert!(session.trigger_disabled());
    }

    #[test]
    fn blank_submission_fails_without_starting() {
        let mut session = FeedbackSession::new();
        session.set_text("   \n\t").unwrap();

        let outcome = session.begin_submission().unwrap();

        assert_eq!(outcome, SubmissionOutcome::Rejected);
        assert_eq!(
            session.state(),
            &WorkflowState::Failed("Please enter some feedback to analyze.".to_string())
        );
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn submission_moves_to_loading_and_locks_input() {
        let mut session = FeedbackSession::new();
        session.set_text("Great service, fast delivery!").unwrap();

        let submission = started(&mut session);

        assert_eq!(submission.text, "Great service, fast delivery!");
        assert_eq!(submission.generation, 1);
        assert!(session.state().is_loading());
        assert!(session.input_disabled());
        assert!(session.trigger_disabled());
        assert_eq!(session.set_text("edit"), Err(WorkflowError::InputLocked));
        assert_eq!(
            session.begin_submission(),
            Err(WorkflowError::SubmissionInFlight)
        );
    }

    #[test]
    fn submission_clears_previous_error() {
        let mut session = FeedbackSession::new();
        session.begin_submission().unwrap();
        assert!(session.state().error().is_some());

        session.set_text("ok").unwrap();
        started(&mut session);
        assert_eq!(session.state(), &WorkflowState::Loading);
    }

    #[test]
    fn completion_applies_result() {
        let mut session = FeedbackSession::new();
        session.set_text("Great service").unwrap();
        let submission = started(&mut session);

        assert!(session.complete(submission.generation, Ok(sample_result())));
        assert_eq!(session.state(), &WorkflowState::Succeeded(sample_result()));
        assert!(!session.input_disabled());
    }

    #[test]
    fn completion_applies_failure() {
        let mut session = FeedbackSession::new();
        session.set_text("Great service").unwrap();
        let submission = started(&mut session);

        assert!(session.complete(submission.generation, Err("boom".to_string())));
        assert_eq!(session.state().error(), Some("boom"));
    }

    #[test]
    fn reset_returns_to_idle_from_any_state() {
        let idle = || {
            let mut session = FeedbackSession::new();
            session.set_text("text").unwrap();
            session
        };
        let loading = || {
            let mut session = idle();
            started(&mut session);
            session
        };
        let succeeded = || {
            let mut session = idle();
            let submission = started(&mut session);
            session.complete(submission.generation, Ok(sample_result()));
            session
        };
        let failed = || {
            let mut session = idle();
            let submission = started(&mut session);
            session.complete(submission.generation, Err("boom".to_string()));
            session
        };

        let sessions = [idle(), loading(), succeeded(), failed()];
        let statuses: Vec<_> = sessions.iter().map(|s| s.state().status()).collect();
        assert_eq!(statuses, ["idle", "loading", "succeeded", "failed"]);

        for mut session in sessions {
            session.reset();

            assert_eq!(session.state(), &WorkflowState::Idle);
            assert_eq!(session.text(), "");
            assert!(session.state().result().is_none());
            assert!(session.state().error().is_none());
            assert!(!session.input_disabled());
        }
    }

    #[test]
    fn reply_after_reset_is_discarded() {
        let mut session = FeedbackSession::new();
        session.set_text("text").unwrap();
        let submission = started(&mut session);

        session.reset();

        assert!(!session.complete(submission.generation, Ok(sample_result())));
        assert_eq!(session.state(), &WorkflowState::Idle);
    }

    #[test]
    fn reply_from_superseded_submission_is_discarded() {
        let mut session = FeedbackSession::new();
        session.set_text("first").unwrap();
        let first = started(&mut session);
        session.reset();
        session.set_text("second").unwrap();
        let second = started(&mut session);

        assert!(!session.complete(first.generation, Ok(sample_result())));
        assert!(session.state().is_loading());
        assert!(session.complete(second.generation, Err("late".to_string())));
        assert_eq!(session.state().error(), Some("late"));
    }
}
