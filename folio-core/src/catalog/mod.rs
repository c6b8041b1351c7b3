//! Photo catalog and the pure derived views the gallery consumes.

pub mod query;

pub use query::GalleryQuery;

use folio_contracts::source::ItemSource;
use folio_model::{CatalogManifest, Category, ImageId, PhotoItem};

use crate::error::Result;

/// Ordered photo catalog, injected into the widgets that present it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<PhotoItem>,
}

impl Catalog {
    pub fn new(items: Vec<PhotoItem>) -> Self {
        Self { items }
    }

    pub fn from_manifest(manifest: &CatalogManifest) -> Result<Self> {
        let items = manifest.items()?;
        tracing::debug!(photos = items.len(), "catalog built from manifest");
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[PhotoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ImageId) -> Option<&PhotoItem> {
        // Ids are manifest positions; fall back to a scan for hand-built
        // catalogs that do not follow that layout.
        match self.items.get(id.as_index()) {
            Some(item) if item.id == id => Some(item),
            _ => self.items.iter().find(|item| item.id == id),
        }
    }

    /// Distinct categories in first-seen order (one filter button each).
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }

    /// Items passing `query`, in catalog order.
    pub fn filtered<'a>(
        &'a self,
        query: &'a GalleryQuery,
    ) -> impl Iterator<Item = &'a PhotoItem> + 'a {
        self.items.iter().filter(move |item| query.matches(item))
    }

    pub fn filtered_ids(&self, query: &GalleryQuery) -> Vec<ImageId> {
        self.filtered(query).map(|item| item.id).collect()
    }

    /// The filtered view as an item source for a navigator.
    pub fn view<'a>(&'a self, query: &'a GalleryQuery) -> CatalogView<'a> {
        CatalogView {
            catalog: self,
            query,
        }
    }

    /// Image sources in catalog order, duplicates included.
    pub fn sources(&self) -> Vec<String> {
        self.items.iter().map(|item| item.src.clone()).collect()
    }
}

impl ItemSource for Catalog {
    type Id = ImageId;

    fn item_ids(&self) -> Vec<ImageId> {
        self.items.item_ids()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Photos of a catalog that pass a query, in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    query: &'a GalleryQuery,
}

impl ItemSource for CatalogView<'_> {
    type Id = ImageId;

    fn item_ids(&self) -> Vec<ImageId> {
        self.catalog.filtered_ids(self.query)
    }

    fn len(&self) -> usize {
        self.catalog.filtered(self.query).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::CategoryFilter;

    fn catalog() -> Catalog {
        let manifest = CatalogManifest::new(
            "fotos/",
            vec![
                "foto-retrato.jpg".into(),
                "playa.jpg".into(),
                "kid-retrato.jpg".into(),
                "pizza-cortando.jpg".into(),
            ],
        );
        Catalog::from_manifest(&manifest).unwrap()
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(
            catalog().categories(),
            vec![Category::Portrait, Category::Street, Category::Product]
        );
    }

    #[test]
    fn get_resolves_ids() {
        let catalog = catalog();
        assert_eq!(catalog.get(ImageId(2)).unwrap().file, "kid-retrato.jpg");
        assert!(catalog.get(ImageId(99)).is_none());
    }

    #[test]
    fn filtered_ids_follow_catalog_order() {
        let catalog = catalog();
        let query = GalleryQuery::default()
            .with_filter(CategoryFilter::Only(Category::Portrait));
        assert_eq!(catalog.filtered_ids(&query), vec![ImageId(0), ImageId(2)]);
    }

    #[test]
    fn view_feeds_the_filtered_ids() {
        let catalog = catalog();
        let query = GalleryQuery::default()
            .with_filter(CategoryFilter::Only(Category::Portrait))
            .with_search("kid");
        let view = catalog.view(&query);
        assert_eq!(view.item_ids(), vec![ImageId(2)]);
        assert_eq!(ItemSource::len(&view), 1);
        assert_eq!(catalog.item_ids().len(), 4);
    }
}
