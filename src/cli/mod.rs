//! Command-line facing workflow
//!
//! - `orchestration` - The release dispatcher driven by `main`

pub mod orchestration;

pub use orchestration::{OutcomeStatus, PublishDispatcher, PublishOutcome};
