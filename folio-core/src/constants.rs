//! Presentation constants
//!
//! Default timings for each widget. Tuning should happen here (or through
//! `folio-config` overrides) so every surface stays consistent.

/// Hero banner crossfade carousel.
pub mod hero {
    /// Delay between automatic advances (ms).
    pub const INTERVAL_MS: u64 = 5_000;
    /// Length of the opacity crossfade between the two layers (ms).
    pub const TRANSITION_MS: u64 = 900;
    /// The hero starts cycling as soon as the page loads.
    pub const AUTOPLAY: bool = true;
}

/// Fullscreen carousel.
pub mod fullscreen {
    pub const INTERVAL_MS: u64 = 6_000;
    pub const TRANSITION_MS: u64 = 1_200;
    /// Manual navigation only unless configured otherwise.
    pub const AUTOPLAY: bool = false;
    /// Images requested eagerly when the carousel is built.
    pub const PRELOAD_COUNT: usize = 3;
    /// Delay before the second eager batch `[PRELOAD_COUNT, 2 * PRELOAD_COUNT)`.
    pub const PROGRESSIVE_PRELOAD_DELAY_MS: u64 = 2_000;
}

/// Gallery lightbox viewer.
pub mod lightbox {
    /// Image fade when stepping through the lightbox (ms).
    pub const TRANSITION_MS: u64 = 300;
    /// Unused by default: the lightbox has no autoplay binding.
    pub const INTERVAL_MS: u64 = 6_000;
    pub const AUTOPLAY: bool = false;
}

/// Lower bound for autoplay intervals; a zero interval would never settle.
pub const MIN_INTERVAL_MS: u64 = 1;
