use tokio::sync::watch;

use crate::duration::TimerDuration;

// ─────────────────────────────────────────────────────────────────────────────
// Shared State
// ─────────────────────────────────────────────────────────────────────────────

/// State shared between the service loop and its handles.
///
/// Both fields live in `watch` channels: handles read the latest committed
/// value without blocking and can subscribe for change notifications. The
/// service loop is the only writer.
pub struct SharedState {
    pub duration: watch::Sender<TimerDuration>,
    pub running: watch::Sender<bool>,
}

impl SharedState {
    pub fn new(duration: TimerDuration) -> Self {
        let (duration, _) = watch::channel(duration);
        let (running, _) = watch::channel(false);
        Self { duration, running }
    }

    /// Publish a new duration, notifying subscribers only on actual change.
    pub fn set_duration(&self, value: TimerDuration) {
        self.duration.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    /// Publish the running flag, notifying subscribers only on actual change.
    pub fn set_running(&self, value: bool) {
        self.running.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}
