//! Error types for the view picker

use thiserror::Error;

/// Reasons a `kill_view` request does not start a selection cycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KillViewError {
    /// A previous cycle is still grabbing or resolving
    #[error("A view selection is already in progress")]
    RequestPending,

    /// Every output refused the grab claim
    #[error("No output could be grabbed ({outputs} output(s) tried)")]
    NoOutputGrabbed { outputs: usize },
}
