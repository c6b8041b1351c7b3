//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod category;
pub mod error;
pub mod ids;
pub mod manifest;
pub mod naming;
pub mod photo;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use category::{Category, CategoryFilter};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ImageId;
pub use manifest::CatalogManifest;
pub use naming::{derive_category, filename_to_meta, filename_to_title};
pub use photo::{DownloadLink, PhotoDescription, PhotoItem};
