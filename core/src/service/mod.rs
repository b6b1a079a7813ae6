//! Timer service - serializes start/stop commands against the countdown
//!
//! Architecture:
//! - SharedState: watch-backed state readable by any handle
//! - TimerHandle: for sending commands + observing shared state
//! - TimerService: background task that processes commands and ticks the
//!   countdown once per second
mod handler;
mod state;

#[cfg(test)]
mod service_tests;

pub use handler::TimerHandle;
use state::SharedState;

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Sleep};

use crate::duration::TimerDuration;

/// Wall-clock gap between two countdown decrements.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ─────────────────────────────────────────────────────────────────────────────
// Service Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Messages sent to the service from frontends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Stop,
    SetDuration(TimerDuration),
    Shutdown,
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer Service
// ─────────────────────────────────────────────────────────────────────────────

/// Countdown service that runs in a background task.
///
/// Commands are processed strictly in arrival order. The countdown itself is
/// the tick arm of the same event loop rather than a separately spawned
/// task: a second concurrent countdown cannot exist, and a tick cancelled by
/// `Stop` can never land after a later `Start` re-arms the timer.
pub struct TimerService {
    shared: Arc<SharedState>,
    cmd_rx: mpsc::Receiver<TimerCommand>,
    /// Whether the tick arm is armed. Disarmed while stopped and when the
    /// countdown reaches zero.
    ticking: bool,
}

impl TimerService {
    /// Create a new timer service and return a handle to communicate with it.
    pub fn new(initial: TimerDuration) -> (Self, TimerHandle) {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        let shared = Arc::new(SharedState::new(initial));

        let service = Self {
            shared: shared.clone(),
            cmd_rx,
            ticking: false,
        };
        let handle = TimerHandle { cmd_tx, shared };

        (service, handle)
    }

    /// Create a service, spawn its event loop and return the handle.
    pub fn spawn(initial: TimerDuration) -> (TimerHandle, JoinHandle<()>) {
        let (service, handle) = Self::new(initial);
        let task = tokio::spawn(service.run());
        (handle, task)
    }

    /// Run the service event loop.
    ///
    /// `biased` polls the command channel before the tick: commands already
    /// queued when a tick falls due are applied first, so a `Stop` sent
    /// right after `Start` disarms the countdown before its first decrement
    /// lands.
    pub async fn run(mut self) {
        let tick = tokio::time::sleep(TICK_INTERVAL);
        tokio::pin!(tick);

        loop {
            tokio::select! {
                biased;

                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(TimerCommand::Start) => self.handle_start(tick.as_mut()),
                        Some(TimerCommand::Stop) => self.handle_stop(),
                        Some(TimerCommand::SetDuration(duration)) => {
                            self.handle_set_duration(duration);
                        }
                        Some(TimerCommand::Shutdown) | None => break,
                    }
                }
                () = tick.as_mut(), if self.ticking => {
                    self.handle_tick(tick.as_mut());
                }
            }
        }

        tracing::debug!("timer service loop exited");
    }

    fn handle_start(&mut self, tick: Pin<&mut Sleep>) {
        let current = *self.shared.duration.borrow();
        if current.is_zero() {
            // Deliberate: a zero duration never enters a running state.
            tracing::debug!("start ignored, duration is zero");
            return;
        }
        if *self.shared.running.borrow() {
            // Already counting down; absorb the duplicate without touching
            // the scheduled tick.
            tracing::debug!("start absorbed, countdown already active");
            return;
        }

        self.shared.set_running(true);
        self.ticking = true;
        // The first decrement fires immediately, not after a full second.
        tick.reset(Instant::now());
        tracing::info!(duration = %current, "countdown started");
    }

    fn handle_stop(&mut self) {
        let was_running = *self.shared.running.borrow();
        self.ticking = false;
        self.shared.set_running(false);
        if was_running {
            let current = *self.shared.duration.borrow();
            tracing::info!(duration = %current, "countdown stopped");
        }
    }

    fn handle_set_duration(&mut self, duration: TimerDuration) {
        if *self.shared.running.borrow() {
            // The tick arm is the only legitimate writer while running.
            tracing::warn!("ignoring duration edit while the countdown is running");
            return;
        }
        self.shared.set_duration(duration);
        tracing::debug!(duration = %duration, "duration set");
    }

    fn handle_tick(&mut self, tick: Pin<&mut Sleep>) {
        let current = *self.shared.duration.borrow();
        if current.is_zero() {
            // Start refuses zero durations, so the tick arm never sees one;
            // disarm rather than count below the bottom.
            self.ticking = false;
            self.shared.set_running(false);
            return;
        }

        let next = current.countdown();
        self.shared.set_duration(next);

        if next.is_zero() {
            self.ticking = false;
            self.shared.set_running(false);
            tracing::info!("countdown finished");
        } else {
            tick.reset(Instant::now() + TICK_INTERVAL);
        }
    }
}
