pub mod config;
pub mod duration;
pub mod error;
pub mod service;

// Re-exports for convenience
pub use config::AppConfig;
pub use duration::TimerDuration;
pub use error::TimerError;
pub use service::{TICK_INTERVAL, TimerCommand, TimerHandle, TimerService};
