//! Hero banner: a shuffled set of images crossfading between two layers.
//!
//! Each move puts the incoming image on the layer that is currently hidden,
//! fades it in and fades the other layer out. The image after the incoming
//! one is queued for preloading so the next crossfade never waits on the
//! network.

use std::collections::HashSet;

use folio_contracts::surface::PresentationSurface;
use rand::Rng;
use rand::seq::SliceRandom;

use super::CarouselOptions;
use crate::navigator::{AutoplaySignal, Navigator, PollReport};
use crate::time::{Clock, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSlot {
    A,
    B,
}

impl LayerSlot {
    fn other(self) -> Self {
        match self {
            LayerSlot::A => LayerSlot::B,
            LayerSlot::B => LayerSlot::A,
        }
    }

    fn index(self) -> usize {
        match self {
            LayerSlot::A => 0,
            LayerSlot::B => 1,
        }
    }
}

/// One of the two stacked background layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossfadeLayer {
    /// Position of the image painted on this layer.
    pub source: Option<usize>,
    pub opaque: bool,
}

/// Two-layer crossfade surface with a preload queue.
#[derive(Debug, Clone)]
pub struct HeroLayers {
    layers: [CrossfadeLayer; 2],
    front: LayerSlot,
    len: usize,
    preloads: Vec<usize>,
}

impl HeroLayers {
    pub fn new(len: usize) -> Self {
        Self {
            layers: [CrossfadeLayer::default(); 2],
            // The first image lands on A.
            front: LayerSlot::B,
            len,
            preloads: Vec::new(),
        }
    }

    pub fn layer(&self, slot: LayerSlot) -> CrossfadeLayer {
        self.layers[slot.index()]
    }

    /// Layer currently faded in.
    pub fn front(&self) -> LayerSlot {
        self.front
    }

    /// Positions queued for preloading since the last drain.
    pub fn pending_preloads(&self) -> &[usize] {
        &self.preloads
    }

    pub fn drain_preloads(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.preloads)
    }

    fn queue_preload(&mut self, index: usize) {
        if index < self.len && !self.preloads.contains(&index) {
            self.preloads.push(index);
        }
    }
}

impl PresentationSurface for HeroLayers {
    fn show_item(&mut self, index: usize) {
        let incoming = self.front.other();
        self.layers[incoming.index()] = CrossfadeLayer {
            source: Some(index),
            opaque: true,
        };
        self.front = incoming;
        if self.len > 1 {
            self.queue_preload((index + 1) % self.len);
        }
    }

    fn hide_item(&mut self, index: usize) {
        let back = self.front.other();
        let layer = &mut self.layers[back.index()];
        if layer.source == Some(index) {
            layer.opaque = false;
        }
    }

    fn sequence_changed(&mut self, len: usize, _position: usize) {
        self.len = len;
    }
}

/// Drop repeated sources, keeping the first occurrence of each.
pub fn dedupe_sources<I>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|src| seen.insert(src.clone()))
        .collect()
}

#[derive(Debug)]
pub struct HeroCarousel<C = SystemClock> {
    sources: Vec<String>,
    navigator: Navigator<usize, HeroLayers, C>,
}

impl HeroCarousel<SystemClock> {
    /// Shuffle with the thread RNG on the wall clock.
    pub fn new<I>(sources: I, options: CarouselOptions) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::with_rng(sources, options, &mut rand::rng(), SystemClock)
    }
}

impl<C: Clock> HeroCarousel<C> {
    pub fn with_rng<I, R>(
        sources: I,
        options: CarouselOptions,
        rng: &mut R,
        clock: C,
    ) -> Self
    where
        I: IntoIterator<Item = String>,
        R: Rng + ?Sized,
    {
        let mut sources = dedupe_sources(sources);
        sources.shuffle(rng);

        let mut layers = HeroLayers::new(sources.len());
        layers.queue_preload(0);
        let mut navigator = Navigator::with_clock(
            (0..sources.len()).collect(),
            options.timing,
            layers,
            clock,
        );
        navigator.present(0);
        if options.autoplay && sources.len() > 1 {
            navigator.start();
        }
        tracing::debug!(images = sources.len(), "hero carousel ready");

        Self { sources, navigator }
    }

    /// Sources in presentation (shuffled) order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn current_source(&self) -> Option<&str> {
        self.navigator
            .current()
            .and_then(|index| self.sources.get(index))
            .map(String::as_str)
    }

    pub fn layers(&self) -> &HeroLayers {
        self.navigator.surface()
    }

    /// Source painted on `slot`, if any.
    pub fn layer_source(&self, slot: LayerSlot) -> Option<&str> {
        self.layers()
            .layer(slot)
            .source
            .and_then(|index| self.sources.get(index))
            .map(String::as_str)
    }

    /// Sources to fetch ahead of their crossfade, oldest request first.
    pub fn take_preloads(&mut self) -> Vec<String> {
        self.navigator
            .surface_mut()
            .drain_preloads()
            .into_iter()
            .filter_map(|index| self.sources.get(index).cloned())
            .collect()
    }

    pub fn next(&mut self) -> bool {
        self.navigator.next()
    }

    pub fn previous(&mut self) -> bool {
        self.navigator.previous()
    }

    /// Page visibility and pointer hover pause the banner.
    pub fn signal(&mut self, signal: AutoplaySignal) {
        self.navigator.signal(signal);
    }

    pub fn poll(&mut self) -> PollReport {
        self.navigator.poll()
    }

    pub fn navigator(&self) -> &Navigator<usize, HeroLayers, C> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<usize, HeroLayers, C> {
        &mut self.navigator
    }

    /// Shuffled sources and the navigator over their positions, for handing
    /// the banner to a driver.
    pub fn into_parts(self) -> (Vec<String>, Navigator<usize, HeroLayers, C>) {
        (self.sources, self.navigator)
    }
}
