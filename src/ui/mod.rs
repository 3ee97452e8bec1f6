//! User interface module - console messages for a publish run.

pub mod formatter;

pub use formatter::{
    display_error, display_plan, display_status, display_success, display_warning,
};

use crate::cli::orchestration::{OutcomeStatus, PublishOutcome};

/// Print the final message of a publish run in the style matching its status.
pub fn display_outcome(outcome: &PublishOutcome) {
    match outcome.status {
        OutcomeStatus::Published => display_success(&outcome.message),
        OutcomeStatus::Skipped => display_status(&outcome.message),
        OutcomeStatus::Failed => display_error(&outcome.message),
    }
}
