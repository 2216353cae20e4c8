//! HTTP adapter for the feedback form.
//!
//! Exposes the analysis workflow two ways:
//! - `GET /`, `POST /analyze`, `POST /reset` - Server-rendered form
//! - `GET /api/feedback` - Current state as JSON
//! - `PUT /api/feedback/text` - Replace the text
//! - `POST /api/feedback/analyze` - Run an analysis and wait for the outcome
//! - `POST /api/feedback/reset` - Clear the form
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod page;
pub mod routes;

pub use dto::*;
pub use handlers::FeedbackAppState;
pub use page::render_page;
pub use routes::feedback_router;
