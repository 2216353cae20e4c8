//! Sentiment Analyzer - customer feedback sentiment via a hosted language model
//!
//! A single form takes free-text feedback, sends it to Gemini with a
//! structured-output schema, and renders the validated sentiment, score,
//! summary and key themes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
