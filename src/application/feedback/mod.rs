//! Feedback analysis workflow.
//!
//! The [`FeedbackController`] owns the form state and drives the
//! [`AnalysisClient`]; [`present`] turns a [`FeedbackSnapshot`] into the
//! panel shown below the form.

mod analysis_client;
mod controller;
mod presenter;
mod prompt;

pub use analysis_client::AnalysisClient;
pub use controller::{FeedbackController, FeedbackSnapshot};
pub use presenter::{
    present, score_bar_width, Panel, ResultView, Tone, NO_THEMES_PLACEHOLDER, RESET_LABEL,
};
pub use prompt::{build_prompt, response_schema, DEFAULT_TEMPERATURE};
