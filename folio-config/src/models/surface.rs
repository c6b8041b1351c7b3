use folio_core::carousel::CarouselOptions;
use folio_core::constants::{fullscreen, hero, lightbox};
use folio_core::navigator::NavigatorTiming;
use serde::{Deserialize, Serialize};

/// Timing of one presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceSettings {
    /// Length of the transition lock after each move (ms).
    pub transition_ms: u64,
    /// Autoplay period (ms). Must be greater than zero.
    pub interval_ms: u64,
    /// Start cycling as soon as the surface is built.
    pub autoplay: bool,
}

impl SurfaceSettings {
    pub fn hero() -> Self {
        Self {
            transition_ms: hero::TRANSITION_MS,
            interval_ms: hero::INTERVAL_MS,
            autoplay: hero::AUTOPLAY,
        }
    }

    pub fn fullscreen() -> Self {
        Self {
            transition_ms: fullscreen::TRANSITION_MS,
            interval_ms: fullscreen::INTERVAL_MS,
            autoplay: fullscreen::AUTOPLAY,
        }
    }

    pub fn lightbox() -> Self {
        Self {
            transition_ms: lightbox::TRANSITION_MS,
            interval_ms: lightbox::INTERVAL_MS,
            autoplay: lightbox::AUTOPLAY,
        }
    }

    pub fn timing(&self) -> NavigatorTiming {
        NavigatorTiming::from_millis(self.transition_ms, self.interval_ms)
    }

    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions::new(self.timing(), self.autoplay)
    }

    pub(crate) fn apply(mut self, overrides: SurfaceOverrides) -> Self {
        if let Some(transition_ms) = overrides.transition_ms {
            self.transition_ms = transition_ms;
        }
        if let Some(interval_ms) = overrides.interval_ms {
            self.interval_ms = interval_ms;
        }
        if let Some(autoplay) = overrides.autoplay {
            self.autoplay = autoplay;
        }
        self
    }
}

/// Partial surface section as written in a config file; unset fields keep
/// the surface's own defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SurfaceOverrides {
    transition_ms: Option<u64>,
    interval_ms: Option<u64>,
    autoplay: Option<bool>,
}
