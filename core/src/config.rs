//! Application configuration
//!
//! Persists the countdown preset a frontend loads at startup. Stored with
//! confy in the platform config directory; a missing or unreadable file
//! falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::duration::TimerDuration;
use crate::error::TimerError;

const APP_NAME: &str = "hourglass";
const CONFIG_NAME: &str = "config";

/// User configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Duration loaded into the timer when a frontend starts up.
    #[serde(default)]
    pub default_duration: TimerDuration,
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }

    /// Persist to the platform config directory.
    pub fn save(&self) -> Result<(), TimerError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(TimerError::SaveConfig)
    }
}
