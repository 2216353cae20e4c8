//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Language model providers (Gemini, mock)
//! - `http` - Browser form and JSON API served with axum

pub mod ai;
pub mod http;
