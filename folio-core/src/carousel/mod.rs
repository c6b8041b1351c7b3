//! Carousel widgets built on a [`Navigator`](crate::navigator::Navigator).
//!
//! - [`hero`]: shuffled crossfade banner alternating two image layers
//! - [`fullscreen`]: slide deck with eager and background preloading

pub mod fullscreen;
pub mod hero;

pub use fullscreen::{
    FullscreenCarousel, FullscreenSlides, Loading, PreloadPriority, PreloadRequest,
};
pub use hero::{CrossfadeLayer, HeroCarousel, HeroLayers, LayerSlot};

use crate::constants;
use crate::navigator::NavigatorTiming;

/// Timing and autoplay default of one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub timing: NavigatorTiming,
    /// Start cycling as soon as the carousel is built.
    pub autoplay: bool,
}

impl CarouselOptions {
    pub fn new(timing: NavigatorTiming, autoplay: bool) -> Self {
        Self { timing, autoplay }
    }

    pub fn hero() -> Self {
        Self::new(NavigatorTiming::hero(), constants::hero::AUTOPLAY)
    }

    pub fn fullscreen() -> Self {
        Self::new(NavigatorTiming::fullscreen(), constants::fullscreen::AUTOPLAY)
    }
}
