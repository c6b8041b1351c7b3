use std::time::Duration;

use crate::constants::{self, MIN_INTERVAL_MS};

/// Fixed timings of one navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorTiming {
    transition: Duration,
    interval: Duration,
}

impl NavigatorTiming {
    /// `interval` is clamped to at least [`MIN_INTERVAL_MS`].
    pub fn new(transition: Duration, interval: Duration) -> Self {
        Self {
            transition,
            interval: interval.max(Duration::from_millis(MIN_INTERVAL_MS)),
        }
    }

    pub fn from_millis(transition_ms: u64, interval_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(transition_ms),
            Duration::from_millis(interval_ms),
        )
    }

    /// How long the transition lock stays engaged after a move.
    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// Period of the autoplay timer.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn hero() -> Self {
        Self::from_millis(
            constants::hero::TRANSITION_MS,
            constants::hero::INTERVAL_MS,
        )
    }

    pub fn fullscreen() -> Self {
        Self::from_millis(
            constants::fullscreen::TRANSITION_MS,
            constants::fullscreen::INTERVAL_MS,
        )
    }

    pub fn lightbox() -> Self {
        Self::from_millis(
            constants::lightbox::TRANSITION_MS,
            constants::lightbox::INTERVAL_MS,
        )
    }
}

impl Default for NavigatorTiming {
    fn default() -> Self {
        Self::fullscreen()
    }
}
