//! Fullscreen slide deck.
//!
//! The first [`PRELOAD_COUNT`] slides load eagerly, the rest in the
//! background. Each move promotes the slide after the target (no wrap), and a
//! progressive batch `[PRELOAD_COUNT, 2 * PRELOAD_COUNT)` is promoted once
//! [`PROGRESSIVE_PRELOAD_DELAY_MS`] have passed since the deck was built.

use std::time::{Duration, Instant};

use folio_contracts::surface::PresentationSurface;
use folio_model::{ImageId, PhotoItem};

use super::CarouselOptions;
use crate::catalog::Catalog;
use crate::constants::fullscreen::{PRELOAD_COUNT, PROGRESSIVE_PRELOAD_DELAY_MS};
use crate::input::{InputAction, KeyBindings, KeyInput};
use crate::navigator::{Navigator, PollReport};
use crate::time::{Clock, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadPriority {
    Eager,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadRequest {
    pub index: usize,
    pub priority: PreloadPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub visible: bool,
    pub loading: Loading,
}

/// Slide visibility plus the queue of image requests to issue.
#[derive(Debug, Clone, Default)]
pub struct FullscreenSlides {
    slides: Vec<Slide>,
    requests: Vec<PreloadRequest>,
}

impl FullscreenSlides {
    pub fn new(len: usize) -> Self {
        let slides = (0..len)
            .map(|index| Slide {
                visible: false,
                loading: if index < PRELOAD_COUNT {
                    Loading::Eager
                } else {
                    Loading::Lazy
                },
            })
            .collect();
        let requests = (0..len)
            .map(|index| PreloadRequest {
                index,
                priority: if index < PRELOAD_COUNT {
                    PreloadPriority::Eager
                } else {
                    PreloadPriority::Background
                },
            })
            .collect();
        Self { slides, requests }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn visible(&self) -> Option<usize> {
        self.slides.iter().position(|slide| slide.visible)
    }

    pub fn pending(&self) -> &[PreloadRequest] {
        &self.requests
    }

    pub fn drain_requests(&mut self) -> Vec<PreloadRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Switch a lazy slide to eager loading. Returns false when it already
    /// was eager or does not exist.
    pub fn promote(&mut self, index: usize) -> bool {
        match self.slides.get_mut(index) {
            Some(slide) if slide.loading == Loading::Lazy => {
                slide.loading = Loading::Eager;
                self.requests.push(PreloadRequest {
                    index,
                    priority: PreloadPriority::Eager,
                });
                true
            }
            _ => false,
        }
    }
}

impl PresentationSurface for FullscreenSlides {
    fn show_item(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.visible = true;
        }
        self.promote(index + 1);
    }

    fn hide_item(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.visible = false;
        }
    }
}

#[derive(Debug)]
pub struct FullscreenCarousel<C = SystemClock> {
    catalog: Catalog,
    navigator: Navigator<ImageId, FullscreenSlides, C>,
    bindings: KeyBindings,
    progressive_at: Option<Instant>,
}

impl FullscreenCarousel<SystemClock> {
    pub fn new(catalog: Catalog, options: CarouselOptions) -> Self {
        Self::with_clock(catalog, options, SystemClock)
    }
}

impl<C: Clock> FullscreenCarousel<C> {
    pub fn with_clock(catalog: Catalog, options: CarouselOptions, clock: C) -> Self {
        let slides = FullscreenSlides::new(catalog.len());
        let progressive_at = (catalog.len() > PRELOAD_COUNT).then(|| {
            clock.now() + Duration::from_millis(PROGRESSIVE_PRELOAD_DELAY_MS)
        });

        let mut navigator = Navigator::from_source(&catalog, options.timing, slides, clock);
        navigator.present(0);
        if options.autoplay {
            navigator.start();
        }

        Self {
            catalog,
            navigator,
            bindings: KeyBindings::carousel(options.autoplay),
            progressive_at,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<&PhotoItem> {
        self.navigator.current().and_then(|id| self.catalog.get(id))
    }

    pub fn slides(&self) -> &FullscreenSlides {
        self.navigator.surface()
    }

    /// Image requests to issue, in the order they were queued.
    pub fn take_requests(&mut self) -> Vec<(PreloadRequest, String)> {
        let requests = self.navigator.surface_mut().drain_requests();
        let ids = self.navigator.items();
        requests
            .into_iter()
            .filter_map(|request| {
                let id = ids.get(request.index)?;
                let item = self.catalog.get(*id)?;
                Some((request, item.src.clone()))
            })
            .collect()
    }

    pub fn next(&mut self) -> bool {
        self.navigator.next()
    }

    pub fn previous(&mut self) -> bool {
        self.navigator.previous()
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.navigator.go_to(index)
    }

    /// Arrow keys navigate; space toggles autoplay when it is configured.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<InputAction> {
        let action = self.bindings.resolve(input)?;
        if let InputAction::Navigate(command) = action {
            self.navigator.apply(command);
        }
        Some(action)
    }

    /// Earliest pending event, the progressive preload included.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.navigator.next_deadline(), self.progressive_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn poll(&mut self) -> PollReport {
        let report = self.navigator.poll();
        if let Some(at) = self.progressive_at
            && at <= self.navigator.clock().now()
        {
            self.progressive_at = None;
            let slides = self.navigator.surface_mut();
            let promoted = (PRELOAD_COUNT..PRELOAD_COUNT * 2)
                .filter(|index| slides.promote(*index))
                .count();
            tracing::debug!(promoted, "progressive preload batch");
        }
        report
    }

    pub fn navigator(&self) -> &Navigator<ImageId, FullscreenSlides, C> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<ImageId, FullscreenSlides, C> {
        &mut self.navigator
    }

    /// Drops the progressive preload schedule.
    pub fn into_parts(self) -> (Catalog, Navigator<ImageId, FullscreenSlides, C>) {
        (self.catalog, self.navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::time::ManualClock;
    use folio_model::CatalogManifest;

    fn carousel(len: usize) -> (FullscreenCarousel<ManualClock>, ManualClock) {
        let files = (0..len).map(|i| format!("foto-{i}.jpg")).collect();
        let catalog =
            Catalog::from_manifest(&CatalogManifest::new("fotos/", files)).unwrap();
        let clock = ManualClock::new();
        let carousel = FullscreenCarousel::with_clock(
            catalog,
            CarouselOptions::fullscreen(),
            clock.clone(),
        );
        (carousel, clock)
    }

    fn eager(requests: &[(PreloadRequest, String)]) -> Vec<usize> {
        requests
            .iter()
            .filter(|(request, _)| request.priority == PreloadPriority::Eager)
            .map(|(request, _)| request.index)
            .collect()
    }

    #[test]
    fn init_loads_first_batch_eagerly_and_the_rest_in_background() {
        let (mut deck, _clock) = carousel(8);
        let requests = deck.take_requests();
        assert_eq!(requests.len(), 8);
        assert_eq!(eager(&requests), vec![0, 1, 2]);
        assert_eq!(requests[5].1, "fotos/foto-5.jpg");
        assert_eq!(deck.slides().visible(), Some(0));
    }

    #[test]
    fn moves_promote_the_following_slide_without_wrapping() {
        let (mut deck, clock) = carousel(8);
        deck.take_requests();

        deck.go_to(4);
        assert_eq!(eager(&deck.take_requests()), vec![5]);
        assert_eq!(deck.slides().visible(), Some(4));

        clock.advance_ms(1_200);
        deck.go_to(7);
        assert!(deck.take_requests().is_empty());
    }

    #[test]
    fn progressive_batch_is_due_after_the_delay() {
        let (mut deck, clock) = carousel(8);
        deck.take_requests();
        assert_eq!(
            deck.next_deadline(),
            Some(clock.origin() + Duration::from_millis(PROGRESSIVE_PRELOAD_DELAY_MS))
        );

        clock.advance_ms(1_999);
        deck.poll();
        assert!(deck.take_requests().is_empty());

        clock.advance_ms(1);
        deck.poll();
        assert_eq!(eager(&deck.take_requests()), vec![3, 4, 5]);
        assert_eq!(deck.next_deadline(), None);
    }

    #[test]
    fn manual_only_by_default() {
        let (mut deck, clock) = carousel(4);
        assert!(!deck.navigator().is_autoplaying());
        assert_eq!(deck.handle_key(&Key::Space.into()), None);

        deck.handle_key(&Key::ArrowLeft.into());
        assert_eq!(deck.current().map(|item| item.file.as_str()), Some("foto-3.jpg"));

        clock.advance_ms(60_000);
        deck.poll();
        assert_eq!(deck.navigator().position(), 3);
    }
}
