//! Configuration library for Folio.
//!
//! Resolves the presentation timings of each widget and the catalog
//! manifest they present, with guard rails that reject unusable values and
//! warnings for suspicious ones. The `folioctl` binary and any embedding
//! application share these rules.

#![allow(missing_docs)]

pub mod catalog;
pub mod loader;
pub mod models;
pub mod validation;

pub use catalog::{ManifestSource, builtin_manifest, load_manifest};
pub use loader::{ConfigLoad, ConfigLoader, ConfigMetadata, error::ConfigLoadError};
pub use models::surface::SurfaceSettings;
pub use models::{CatalogSettings, ConfigSource, PresentationConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails};
