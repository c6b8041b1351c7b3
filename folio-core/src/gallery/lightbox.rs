use std::fmt;

use folio_model::{DownloadLink, PhotoItem};

/// "N de M" counter shown under the lightbox image (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} de {}", self.position, self.total)
    }
}

/// Everything the lightbox renders for the current photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxEntry<'a> {
    pub item: &'a PhotoItem,
    pub counter: Counter,
    pub meta: &'a str,
    pub download: DownloadLink,
}

impl<'a> LightboxEntry<'a> {
    pub(crate) fn new(item: &'a PhotoItem, position: usize, total: usize) -> Self {
        Self {
            item,
            counter: Counter {
                position: position + 1,
                total,
            },
            meta: item.display_meta(),
            download: item.download(),
        }
    }

    pub fn title(&self) -> &'a str {
        &self.item.title
    }
}
