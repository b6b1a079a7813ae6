//! Error types for timer operations

use thiserror::Error;

/// Errors surfaced to frontends driving the timer
#[derive(Debug, Error)]
pub enum TimerError {
    /// The service task is gone and its command channel is closed.
    #[error("timer service is no longer running")]
    ServiceClosed,

    #[error("failed to save configuration")]
    SaveConfig(#[source] confy::ConfyError),
}
