//! Feedback domain module.
//!
//! Holds everything about a single feedback analysis that does not depend on
//! the outside world: the text being edited, the sentiment result, the rules
//! for accepting a model reply, and the workflow state machine.
//!
//! # State machine
//!
//! ```text
//! Idle ──submit──► Loading ──complete──► Succeeded
//!   ▲                 │
//!   │                 └────fail───────► Failed
//!   └──────────────reset (any state)─────────┘
//! ```

mod errors;
mod input;
mod schema;
mod sentiment;
mod workflow;

pub use errors::{
    AnalysisError, AnalysisErrorKind, FeedbackValidationError, SchemaError, WorkflowError,
    ANALYSIS_FAILED_MESSAGE, UNKNOWN_FAILURE_MESSAGE,
};
pub use input::FeedbackInput;
pub use schema::{parse_analysis, MAX_KEY_THEMES};
pub use sentiment::{AnalysisResult, Sentiment};
pub use workflow::{FeedbackSession, Submission, SubmissionOutcome, WorkflowState};
