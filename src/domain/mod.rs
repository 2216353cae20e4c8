//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `feedback` - Feedback text, sentiment results, reply validation and the
//!   analysis workflow state machine

pub mod feedback;
