use std::sync::Arc;

use hourglass_core::{AppConfig, TimerHandle, TimerService};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - the timer logic lives in the core
/// service; the context only wires it up.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    /// Handle to the timer service running in the background.
    pub timer: TimerHandle,
    service_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl CliContext {
    /// Load the config and spawn the timer service seeded with the preset.
    pub fn new() -> Self {
        let config = AppConfig::load();
        let (timer, task) = TimerService::spawn(config.default_duration);
        Self {
            config: Arc::new(RwLock::new(config)),
            timer,
            service_task: Arc::new(Mutex::new(Some(task))),
        }
    }

    /// Stop the service loop and wait for it to wind down.
    pub async fn shutdown(&self) {
        let _ = self.timer.shutdown().await;
        if let Some(task) = self.service_task.lock().await.take() {
            let _ = task.await;
        }
        tracing::debug!("timer service stopped");
    }
}
