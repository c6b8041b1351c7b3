pub use crate::category::{Category, CategoryFilter};
pub use crate::ids::ImageId;
pub use crate::manifest::{CatalogManifest, DEFAULT_IMAGE_FOLDER};
pub use crate::photo::{DownloadLink, PhotoDescription, PhotoItem};
