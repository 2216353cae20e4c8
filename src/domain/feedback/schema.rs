//! Validation of the model's JSON reply.
//!
//! The model is asked for an object with `sentiment`, `sentimentScore`,
//! `summary` and `keyThemes`. Anything else is rejected here, before the
//! result can reach the presenter.

use serde_json::{Map, Value};

use super::errors::SchemaError;
use super::sentiment::{AnalysisResult, Sentiment};

/// Number of themes the model is asked for at most. Not enforced on replies.
pub const MAX_KEY_THEMES: usize = 5;

/// Parses and validates a raw model reply.
///
/// Surrounding whitespace is ignored. The score is taken as-is, without
/// clamping, and themes keep the model's order and count.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, SchemaError> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;

    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;

    Ok(AnalysisResult {
        sentiment: sentiment_field(object)?,
        sentiment_score: score_field(object)?,
        summary: summary_field(object)?,
        key_themes: themes_field(object)?,
    })
}

fn required<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, SchemaError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(SchemaError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn sentiment_field(object: &Map<String, Value>) -> Result<Sentiment, SchemaError> {
    let label = required(object, "sentiment")?
        .as_str()
        .ok_or_else(|| SchemaError::invalid_field("sentiment", "expected a string"))?;

    label
        .parse()
        .map_err(|reason: String| SchemaError::invalid_field("sentiment", reason))
}

fn score_field(object: &Map<String, Value>) -> Result<f64, SchemaError> {
    required(object, "sentimentScore")?
        .as_f64()
        .ok_or_else(|| SchemaError::invalid_field("sentimentScore", "expected a number"))
}

fn summary_field(object: &Map<String, Value>) -> Result<String, SchemaError> {
    let summary = required(object, "summary")?
        .as_str()
        .ok_or_else(|| SchemaError::invalid_field("summary", "expected a string"))?;

    if summary.trim().is_empty() {
        return Err(SchemaError::invalid_field("summary", "must not be blank"));
    }
    Ok(summary.to_string())
}

fn themes_field(object: &Map<String, Value>) -> Result<Vec<String>, SchemaError> {
    let items = required(object, "keyThemes")?
        .as_array()
        .ok_or_else(|| SchemaError::invalid_field("keyThemes", "expected an array"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                SchemaError::invalid_field("keyThemes", format!("item {} is not a string", index))
            })
        })
        .collect()
}
