//! AI provider adapters.
//!
//! - `gemini_provider` - Google Generative Language API (production)
//! - `mock_provider` - Scripted replies for tests and local runs

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_provider::{MockAIProvider, MockResponse};
