//! Sentiment labels and analysis results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall emotional polarity of a feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All labels, in the order they are offered to the model.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    /// Labels are matched exactly; the model is told to use these spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("'{}' is not one of Positive, Negative, Neutral", s))
    }
}

/// Structured result of one analysis.
///
/// `sentiment_score` is whatever the model returned; it is meant to lie in
/// `[-1.0, 1.0]` and is not forced to agree in sign with `sentiment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub summary: String,
    /// Themes in the order the model emitted them.
    pub key_themes: Vec<String>,
}

impl AnalysisResult {
    pub fn new(
        sentiment: Sentiment,
        sentiment_score: f64,
        summary: impl Into<String>,
        key_themes: Vec<String>,
    ) -> Self {
        Self {
            sentiment,
            sentiment_score,
            summary: summary.into(),
            key_themes,
        }
    }
}
