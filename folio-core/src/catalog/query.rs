use folio_model::{CategoryFilter, PhotoItem};

/// Gallery filter bar and search box state.
///
/// The search text is stored trimmed and lowercased; an item passes when its
/// category matches the filter and the text is empty or found in its title
/// or file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GalleryQuery {
    filter: CategoryFilter,
    search: String,
}

impl GalleryQuery {
    pub fn new(filter: CategoryFilter, search: &str) -> Self {
        Self {
            filter,
            search: normalize_search(search),
        }
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = normalize_search(search);
        self
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = normalize_search(search);
    }

    /// No filter and no search text: every item passes.
    pub fn is_unfiltered(&self) -> bool {
        self.filter == CategoryFilter::All && self.search.is_empty()
    }

    pub fn matches(&self, item: &PhotoItem) -> bool {
        self.filter.matches(item.category) && item.matches_search(&self.search)
    }
}

fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}
