//! Countdown duration value type
//!
//! `TimerDuration` is an immutable count of whole seconds with
//! hour/minute/second views. Editing a component produces a new value;
//! nothing is mutated in place. The timer service owns the only code path
//! that counts a duration down.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Remaining time of a countdown, in whole seconds.
///
/// The three components are derived views over the total:
/// `hours * 3600 + minutes * 60 + seconds` always reconstructs the exact
/// total. Construction accepts unnormalized components (minutes or seconds
/// of 60 and above simply carry into the total); restricting edits to
/// display ranges is a frontend concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerDuration(u64);

impl TimerDuration {
    /// Build from an (hours, minutes, seconds) triple. Never fails.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }

    /// Build from a raw total-seconds count.
    pub fn from_secs(total: u64) -> Self {
        Self(total)
    }

    /// Total remaining seconds.
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn hours(&self) -> u64 {
        self.0 / 3600
    }

    pub fn minutes(&self) -> u64 {
        self.0 % 3600 / 60
    }

    pub fn seconds(&self) -> u64 {
        self.0 % 60
    }

    /// New value with the hour component replaced.
    pub fn with_hours(&self, hours: u64) -> Self {
        Self::new(hours, self.minutes(), self.seconds())
    }

    /// New value with the minute component replaced.
    pub fn with_minutes(&self, minutes: u64) -> Self {
        Self::new(self.hours(), minutes, self.seconds())
    }

    /// New value with the second component replaced.
    pub fn with_seconds(&self, seconds: u64) -> Self {
        Self::new(self.hours(), self.minutes(), seconds)
    }

    /// One tick of the countdown: a new value one second smaller.
    ///
    /// Must not be called on a zero value; the service checks `is_zero`
    /// before ticking.
    pub fn countdown(&self) -> Self {
        debug_assert!(!self.is_zero(), "countdown on a zero duration");
        Self(self.0.saturating_sub(1))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
