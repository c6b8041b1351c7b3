//! Catalog manifest sources.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use folio_model::CatalogManifest;

use crate::loader::error::ConfigLoadError;

const BUILTIN_MANIFEST: &str = include_str!("../assets/catalog.toml");

/// Where the catalog manifest came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ManifestSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestSource::Builtin => write!(f, "built-in portfolio"),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The portfolio shipped with Folio: 17 entries (one photo listed twice)
/// with their descriptions.
pub fn builtin_manifest() -> Result<CatalogManifest, ConfigLoadError> {
    toml::from_str(BUILTIN_MANIFEST).map_err(|err| ConfigLoadError::ManifestParse {
        origin: "built-in catalog".into(),
        source: anyhow!(err),
    })
}

/// Read a TOML or JSON manifest, chosen by extension (TOML otherwise).
pub fn load_manifest(path: &Path) -> Result<CatalogManifest, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ManifestIo {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|err| anyhow!(err)),
        _ => toml::from_str(&contents).map_err(|err| anyhow!(err)),
    };

    parsed.map_err(|source| ConfigLoadError::ManifestParse {
        origin: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{Category, PhotoDescription};

    #[test]
    fn builtin_manifest_parses_and_validates() {
        let manifest = builtin_manifest().unwrap();
        assert_eq!(manifest.image_folder, "fotos/");
        assert_eq!(manifest.files.len(), 17);
        assert_eq!(manifest.duplicate_files(), vec!["foto-retrato.jpg"]);
        assert_eq!(manifest.descriptions.len(), 16);

        let items = manifest.items().unwrap();
        assert_eq!(items[0].title, "Foto Retrato");
        assert_eq!(items[5].category, Category::Weddings);
        assert_ne!(items[12].description, PhotoDescription::fallback());
        assert_eq!(items[12].file, "monta;a-playa.jpg");
    }
}
