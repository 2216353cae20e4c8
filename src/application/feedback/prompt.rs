//! Instruction text and declared reply schema sent to the model.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::domain::feedback::{Sentiment, MAX_KEY_THEMES};

/// Low temperature keeps classifications stable between runs.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    let labels: Vec<&str> = Sentiment::ALL.iter().map(Sentiment::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": {
                "type": "STRING",
                "enum": labels,
                "description": "The overall sentiment of the text."
            },
            "sentimentScore": {
                "type": "NUMBER",
                "description": "A numerical score from -1.0 (most negative) to 1.0 (most positive)."
            },
            "summary": {
                "type": "STRING",
                "description": "A concise, one-sentence summary of the feedback."
            },
            "keyThemes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!(
                    "An array of key topics or themes mentioned. Maximum of {}.",
                    MAX_KEY_THEMES
                )
            }
        },
        "required": ["sentiment", "sentimentScore", "summary", "keyThemes"]
    })
});

/// Schema the model's JSON reply must follow.
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

/// Builds the instruction for one piece of feedback.
pub fn build_prompt(feedback: &str) -> String {
    format!(
        r#"You are an expert customer sentiment analyst. Analyze the following customer feedback text.
Provide your analysis in a structured JSON format.

The JSON object should include:
1. "sentiment": Classify the sentiment as one of three options: "Positive", "Negative", or "Neutral".
2. "sentimentScore": A numerical score from -1.0 (most negative) to 1.0 (most positive).
3. "summary": A concise, one-sentence summary of the feedback.
4. "keyThemes": An array of strings representing the key topics or themes mentioned in the feedback. Limit this to a maximum of {max} themes.

Analyze the following text:
"{feedback}""#,
        max = MAX_KEY_THEMES,
        feedback = feedback,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_feedback_and_theme_cap() {
        let prompt = build_prompt("Great service, fast delivery!");
        assert!(prompt.ends_with("\"Great service, fast delivery!\""));
        assert!(prompt.contains("maximum of 5 themes"));
        assert!(prompt.contains("\"Positive\", \"Negative\", or \"Neutral\""));
    }

    #[test]
    fn schema_requires_all_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["sentiment", "sentimentScore", "summary", "keyThemes"]
        );
    }

    #[test]
    fn schema_restricts_sentiment_labels() {
        let labels = &response_schema()["properties"]["sentiment"]["enum"];
        assert_eq!(labels, &json!(["Positive", "Negative", "Neutral"]));
        assert_eq!(response_schema()["properties"]["keyThemes"]["type"], "ARRAY");
    }
}
