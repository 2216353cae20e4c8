//! The feedback text held by the form.

use super::errors::FeedbackValidationError;

/// Feedback text as currently typed. Any string is accepted; only submission
/// checks that it is not blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackInput {
    text: String,
}

impl FeedbackInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns the text to submit, untrimmed, or rejects blank input.
    pub fn submittable(&self) -> Result<&str, FeedbackValidationError> {
        if self.is_blank() {
            return Err(FeedbackValidationError::Blank);
        }
        Ok(&self.text)
    }
}
