//! FeedbackController - owns the form state and runs submissions.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::analysis_client::AnalysisClient;
use crate::domain::feedback::{
    FeedbackSession, Submission, SubmissionOutcome, WorkflowError, WorkflowState,
    UNKNOWN_FAILURE_MESSAGE,
};

/// Read-only copy of the form state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSnapshot {
    pub text: String,
    pub state: WorkflowState,
    pub input_disabled: bool,
    pub trigger_disabled: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<&FeedbackSession> for FeedbackSnapshot {
    fn from(session: &FeedbackSession) -> Self {
        Self {
            text: session.text().to_string(),
            state: session.state().clone(),
            input_disabled: session.input_disabled(),
            trigger_disabled: session.trigger_disabled(),
            updated_at: session.updated_at(),
        }
    }
}

/// Drives the analysis workflow for one form.
///
/// Cheap to clone; clones share the same session. The lock is never held
/// across the remote call.
#[derive(Clone)]
pub struct FeedbackController {
    session: Arc<Mutex<FeedbackSession>>,
    client: Arc<AnalysisClient>,
}

impl FeedbackController {
    pub fn new(client: Arc<AnalysisClient>) -> Self {
        Self {
            session: Arc::new(Mutex::new(FeedbackSession::new())),
            client,
        }
    }

    pub async fn snapshot(&self) -> FeedbackSnapshot {
        FeedbackSnapshot::from(&*self.session.lock().await)
    }

    pub async fn set_text(&self, value: impl Into<String>) -> Result<(), WorkflowError> {
        self.session.lock().await.set_text(value)
    }

    /// Moves to `Loading` and returns the work to run, or `None` if blank
    /// input sent the session straight to `Failed`.
    pub async fn start_submission(&self) -> Result<Option<Submission>, WorkflowError> {
        self.start_submission_with(None).await
    }

    /// Optionally replaces the text, then starts a submission. Both happen
    /// under one lock, so a concurrent reset cannot slip in between.
    #[tracing::instrument(skip(self, text))]
    pub async fn start_submission_with(
        &self,
        text: Option<String>,
    ) -> Result<Option<Submission>, WorkflowError> {
        let outcome = {
            let mut session = self.session.lock().await;
            if let Some(text) = text {
                session.set_text(text)?;
            }
            session.begin_submission()?
        };

        match outcome {
            SubmissionOutcome::Started(submission) => {
                tracing::debug!(
                    generation = submission.generation,
                    request_id = %submission.request_id,
                    "Submission started"
                );
                Ok(Some(submission))
            }
            SubmissionOutcome::Rejected => {
                tracing::debug!("Blank feedback rejected");
                Ok(None)
            }
        }
    }

    /// Runs the analysis for an accepted submission and applies the outcome.
    ///
    /// Loading is always cleared, including when the client panics. Returns
    /// the state after the attempt; if a reset or newer submission superseded
    /// this one, the outcome is dropped and the current state is returned.
    pub async fn run_submission(&self, submission: Submission) -> WorkflowState {
        let Submission {
            generation,
            request_id,
            text,
        } = submission;

        let outcome = match AssertUnwindSafe(self.client.analyze_traced(&text, request_id))
            .catch_unwind()
            .await
        {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(err)) => Err(err.user_message().to_string()),
            Err(_) => {
                tracing::error!(%request_id, "Analysis task panicked");
                Err(UNKNOWN_FAILURE_MESSAGE.to_string())
            }
        };

        let mut session = self.session.lock().await;
        if !session.complete(generation, outcome) {
            tracing::debug!(
                %request_id,
                generation,
                current = session.generation(),
                "Discarding stale analysis outcome"
            );
        }
        session.state().clone()
    }

    /// `start_submission` followed by `run_submission`, awaited in place.
    pub async fn submit(&self) -> Result<WorkflowState, WorkflowError> {
        match self.start_submission().await? {
            Some(submission) => Ok(self.run_submission(submission).await),
            None => Ok(self.session.lock().await.state().clone()),
        }
    }

    /// Starts a submission and runs it on a detached task.
    ///
    /// The state is already `Loading` (or `Failed`) when this returns.
    /// Dropping the handle does not cancel the analysis.
    pub async fn spawn_submission(
        &self,
    ) -> Result<Option<JoinHandle<WorkflowState>>, WorkflowError> {
        self.spawn_submission_with(None).await
    }

    /// [`spawn_submission`](Self::spawn_submission) after atomically
    /// replacing the text.
    pub async fn spawn_submission_with(
        &self,
        text: Option<String>,
    ) -> Result<Option<JoinHandle<WorkflowState>>, WorkflowError> {
        let Some(submission) = self.start_submission_with(text).await? else {
            return Ok(None);
        };

        let controller = self.clone();
        Ok(Some(tokio::spawn(async move {
            controller.run_submission(submission).await
        })))
    }

    /// Clears text, result and error. Does not abort an in-flight request;
    /// its outcome will be discarded.
    pub async fn reset(&self) {
        self.session.lock().await.reset();
        tracing::debug!("Feedback form reset");
    }
}
