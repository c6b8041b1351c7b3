use folio_model::{ImageId, PhotoItem};

use crate::id::ItemIdLike;

/// Supplies the ordered identifiers a navigator presents.
pub trait ItemSource {
    /// Identifier carried by each entry of the sequence.
    type Id: ItemIdLike;

    /// Ordered identifiers of the active sequence.
    fn item_ids(&self) -> Vec<Self::Id>;

    /// Number of entries in the active sequence.
    fn len(&self) -> usize {
        self.item_ids().len()
    }

    /// Whether the active sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemSource for [PhotoItem] {
    type Id = ImageId;

    fn item_ids(&self) -> Vec<ImageId> {
        self.iter().map(|item| item.id).collect()
    }

    fn len(&self) -> usize {
        <[PhotoItem]>::len(self)
    }
}
