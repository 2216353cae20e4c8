//! AnalysisClient - one round trip to the model per feedback text.

use std::sync::Arc;

use uuid::Uuid;

use super::prompt::{build_prompt, response_schema, DEFAULT_TEMPERATURE};
use crate::domain::feedback::{parse_analysis, AnalysisError, AnalysisResult, MAX_KEY_THEMES};
use crate::ports::{AIProvider, CompletionRequest};

/// Sends feedback to the model and validates the structured reply.
///
/// Single attempt, no retries. Every failure is logged with its cause and
/// returned as an [`AnalysisError`] carrying only the generic message.
pub struct AnalysisClient {
    provider: Arc<dyn AIProvider>,
    temperature: f32,
}

impl AnalysisClient {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_traced(text, Uuid::new_v4()).await
    }

    /// Same as [`analyze`](Self::analyze) with a caller-supplied request id.
    #[tracing::instrument(
        name = "analyze_feedback",
        skip(self, text),
        fields(provider = %self.provider.provider_info().name, chars = text.chars().count())
    )]
    pub async fn analyze_traced(
        &self,
        text: &str,
        request_id: Uuid,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = CompletionRequest::new(build_prompt(text), request_id.to_string())
            .with_temperature(self.temperature)
            .with_json_schema(response_schema().clone());

        let response = self.provider.complete(request).await.map_err(|e| {
            tracing::error!(%request_id, error = %e, "Error analyzing sentiment: remote call failed");
            AnalysisError::transport()
        })?;

        let result = parse_analysis(&response.content).map_err(|e| {
            tracing::error!(
                %request_id,
                error = %e,
                reply = %response.content,
                "Error analyzing sentiment: invalid reply"
            );
            AnalysisError::from_schema(&e)
        })?;

        if result.key_themes.len() > MAX_KEY_THEMES {
            tracing::warn!(
                %request_id,
                themes = result.key_themes.len(),
                "Model returned more key themes than requested"
            );
        }

        tracing::info!(
            %request_id,
            sentiment = %result.sentiment,
            score = result.sentiment_score,
            model = %response.model,
            "Feedback analyzed"
        );

        Ok(result)
    }
}
