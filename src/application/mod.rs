//! Application layer - orchestration of domain logic and ports.
//!
//! - `feedback` - Analysis client, workflow controller and result presenter

pub mod feedback;
