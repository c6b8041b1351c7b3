//! Thumbnail gallery with category filter, search and lightbox viewer.
//!
//! The lightbox navigator's sequence is the filtered list of catalog ids, so
//! next/previous wrap within what the grid currently shows. The catalog id
//! travels with each position for title, meta and download lookups only.

pub mod lightbox;

pub use lightbox::{Counter, LightboxEntry};

use folio_contracts::surface::PresentationSurface;
use folio_model::{Category, CategoryFilter, ImageId, PhotoItem};

use crate::catalog::{Catalog, GalleryQuery};
use crate::input::{InputAction, KeyBindings, KeyInput, Platform};
use crate::navigator::{NavCommand, Navigator, NavigatorTiming, PollReport};
use crate::time::{Clock, SystemClock};

#[derive(Debug)]
pub struct Gallery<S, C = SystemClock> {
    catalog: Catalog,
    query: GalleryQuery,
    lightbox: Navigator<ImageId, S, C>,
    bindings: KeyBindings,
    open: bool,
}

impl<S> Gallery<S, SystemClock>
where
    S: PresentationSurface,
{
    pub fn new(catalog: Catalog, timing: NavigatorTiming, surface: S) -> Self {
        Self::with_clock(catalog, timing, surface, SystemClock)
    }
}

impl<S, C> Gallery<S, C>
where
    S: PresentationSurface,
    C: Clock,
{
    pub fn with_clock(
        catalog: Catalog,
        timing: NavigatorTiming,
        surface: S,
        clock: C,
    ) -> Self {
        let query = GalleryQuery::default();
        let lightbox = Navigator::from_source(&catalog.view(&query), timing, surface, clock);
        Self {
            catalog,
            query,
            lightbox,
            bindings: KeyBindings::gallery(Platform::default()),
            open: false,
        }
    }

    /// Use the search shortcut modifier of `platform`.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.bindings = KeyBindings::gallery(platform);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &GalleryQuery {
        &self.query
    }

    pub fn lightbox(&self) -> &Navigator<ImageId, S, C> {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Navigator<ImageId, S, C> {
        &mut self.lightbox
    }

    pub fn into_parts(self) -> (Catalog, Navigator<ImageId, S, C>) {
        (self.catalog, self.lightbox)
    }

    /// Cards of the grid, in catalog order.
    pub fn visible(&self) -> Vec<&PhotoItem> {
        self.catalog.filtered(&self.query).collect()
    }

    /// Filter buttons: "all" first, then one per category.
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.catalog.categories().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalog.categories()
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.query.filter() != filter {
            self.query.set_filter(filter);
            self.refresh();
        }
    }

    pub fn set_search(&mut self, search: &str) {
        let previous = self.query.clone();
        self.query.set_search(search);
        if self.query != previous {
            self.refresh();
        }
    }

    /// Open the lightbox on a thumbnail. Ids outside the current view are
    /// ignored.
    pub fn open(&mut self, id: ImageId) -> bool {
        let Some(index) = self.lightbox.items().iter().position(|item| *item == id)
        else {
            return false;
        };
        self.lightbox.present(index);
        self.open = true;
        tracing::debug!(%id, index, "lightbox opened");
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn next(&mut self) -> bool {
        self.open && self.lightbox.next()
    }

    pub fn previous(&mut self) -> bool {
        self.open && self.lightbox.previous()
    }

    pub fn current(&self) -> Option<LightboxEntry<'_>> {
        if !self.open {
            return None;
        }
        let id = self.lightbox.current()?;
        let item = self.catalog.get(id)?;
        Some(LightboxEntry::new(
            item,
            self.lightbox.position(),
            self.lightbox.len(),
        ))
    }

    /// Route a key press. Navigation and Escape only apply while the
    /// lightbox is open; the search shortcut is always live.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<InputAction> {
        let action = self.bindings.resolve(input)?;
        match action {
            InputAction::FocusSearch => Some(action),
            _ if !self.open => None,
            InputAction::Close => {
                self.close();
                Some(action)
            }
            InputAction::Navigate(command) => {
                self.navigate(command);
                Some(action)
            }
        }
    }

    pub fn poll(&mut self) -> PollReport {
        self.lightbox.poll()
    }

    fn navigate(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::GoTo(index) => self.open && self.lightbox.go_to(index),
            // The lightbox has no autoplay binding.
            _ => false,
        }
    }

    fn refresh(&mut self) {
        self.lightbox.set_source(&self.catalog.view(&self.query));
        if self.lightbox.is_empty() {
            self.open = false;
        }
        tracing::debug!(
            filter = %self.query.filter(),
            search = self.query.search(),
            visible = self.lightbox.len(),
            "gallery view refreshed"
        );
    }
}
