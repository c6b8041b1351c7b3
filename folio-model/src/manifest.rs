use std::collections::{BTreeMap, HashSet};

use crate::error::{ModelError, Result};
use crate::ids::ImageId;
use crate::photo::{PhotoDescription, PhotoItem};

pub const DEFAULT_IMAGE_FOLDER: &str = "fotos/";

#[cfg(feature = "serde")]
fn default_image_folder() -> String {
    DEFAULT_IMAGE_FOLDER.to_string()
}

/// Declarative list of the photos a portfolio page presents.
///
/// File order is presentation order. Descriptions are keyed by file name and
/// are optional per photo.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogManifest {
    #[cfg_attr(feature = "serde", serde(default = "default_image_folder"))]
    pub image_folder: String,
    pub files: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub descriptions: BTreeMap<String, PhotoDescription>,
}

impl CatalogManifest {
    pub fn new(image_folder: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            image_folder: image_folder.into(),
            files,
            descriptions: BTreeMap::new(),
        }
    }

    pub fn with_description(
        mut self,
        file: impl Into<String>,
        description: PhotoDescription,
    ) -> Self {
        self.descriptions.insert(file.into(), description);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.files.iter().position(|f| f.trim().is_empty()) {
            return Err(ModelError::InvalidManifest(format!(
                "file entry {pos} is blank"
            )));
        }
        if self.files.len() > u32::MAX as usize {
            return Err(ModelError::InvalidManifest(
                "too many files for 32-bit image ids".into(),
            ));
        }
        Ok(())
    }

    /// File names listed more than once, in first-repeat order.
    pub fn duplicate_files(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for file in &self.files {
            if !seen.insert(file.as_str()) && !dupes.contains(&file.as_str()) {
                dupes.push(file.as_str());
            }
        }
        dupes
    }

    /// Full image sources (`image_folder + file`) in manifest order.
    pub fn sources(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|file| format!("{}{}", self.image_folder, file))
            .collect()
    }

    /// Materialize catalog items; ids are manifest positions.
    pub fn items(&self) -> Result<Vec<PhotoItem>> {
        self.validate()?;
        Ok(self
            .files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                PhotoItem::from_file(
                    ImageId(index as u32),
                    &self.image_folder,
                    file,
                    self.descriptions.get(file).cloned(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn sample() -> CatalogManifest {
        CatalogManifest::new(
            DEFAULT_IMAGE_FOLDER,
            vec![
                "foto-retrato.jpg".into(),
                "playa.jpg".into(),
                "foto-retrato.jpg".into(),
            ],
        )
        .with_description(
            "playa.jpg",
            PhotoDescription::new("mar", "horizonte", "atardecer"),
        )
    }

    #[test]
    fn items_keep_manifest_order_and_ids() {
        let items = sample().items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].id, ImageId(1));
        assert_eq!(items[1].category, Category::Street);
        assert_eq!(items[1].description.story, "atardecer");
        assert_eq!(items[2].description, PhotoDescription::fallback());
    }

    #[test]
    fn duplicates_are_reported_once() {
        assert_eq!(sample().duplicate_files(), vec!["foto-retrato.jpg"]);
    }

    #[test]
    fn blank_entries_are_rejected() {
        let manifest =
            CatalogManifest::new("fotos/", vec!["a.jpg".into(), "  ".into()]);
        assert!(matches!(
            manifest.items(),
            Err(ModelError::InvalidManifest(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_manifest_defaults_the_folder() {
        let manifest: CatalogManifest =
            serde_json::from_str(r#"{ "files": ["playa.jpg"] }"#).unwrap();
        assert_eq!(manifest.image_folder, DEFAULT_IMAGE_FOLDER);
        assert_eq!(manifest.sources(), vec!["fotos/playa.jpg".to_string()]);
    }
}
