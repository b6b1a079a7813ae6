use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use super::TimerCommand;
use super::state::SharedState;
use crate::duration::TimerDuration;
use crate::error::TimerError;

// ─────────────────────────────────────────────────────────────────────────────
// Timer Handle (for frontends)
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to communicate with the timer service and observe its state
#[derive(Clone)]
pub struct TimerHandle {
    pub(super) cmd_tx: mpsc::Sender<TimerCommand>,
    pub(super) shared: Arc<SharedState>,
}

impl TimerHandle {
    /// Send command to start the countdown.
    ///
    /// Starting an already running countdown is absorbed; starting a zero
    /// duration is ignored.
    pub async fn start(&self) -> Result<(), TimerError> {
        self.send(TimerCommand::Start).await
    }

    /// Send command to stop the countdown; a no-op when already stopped.
    pub async fn stop(&self) -> Result<(), TimerError> {
        self.send(TimerCommand::Stop).await
    }

    /// Send command to replace the duration; applied only while stopped.
    pub async fn set_duration(&self, duration: TimerDuration) -> Result<(), TimerError> {
        self.send(TimerCommand::SetDuration(duration)).await
    }

    /// Ask the service loop to exit.
    pub async fn shutdown(&self) -> Result<(), TimerError> {
        self.send(TimerCommand::Shutdown).await
    }

    async fn send(&self, cmd: TimerCommand) -> Result<(), TimerError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| TimerError::ServiceClosed)
    }

    /// Latest committed duration, without blocking.
    pub fn duration(&self) -> TimerDuration {
        *self.shared.duration.borrow()
    }

    /// Whether a countdown is currently active, without blocking.
    pub fn is_running(&self) -> bool {
        *self.shared.running.borrow()
    }

    /// Subscribe to duration changes. Latest value wins; every committed
    /// change bumps the channel version.
    pub fn watch_duration(&self) -> watch::Receiver<TimerDuration> {
        self.shared.duration.subscribe()
    }

    /// Subscribe to running-flag changes.
    pub fn watch_running(&self) -> watch::Receiver<bool> {
        self.shared.running.subscribe()
    }
}
