use crate::category::Category;
use crate::ids::ImageId;
use crate::naming::{derive_category, filename_to_meta, filename_to_title};

/// Narrative shown next to a photo in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoDescription {
    pub purpose: String,
    pub technique: String,
    pub story: String,
}

impl PhotoDescription {
    pub const FALLBACK_PURPOSE: &'static str =
        "Capturar momentos únicos con autenticidad";
    pub const FALLBACK_TECHNIQUE: &'static str =
        "Luz natural y composición cuidadosa";
    pub const FALLBACK_STORY: &'static str =
        "Cada imagen cuenta una historia especial";

    pub fn new(
        purpose: impl Into<String>,
        technique: impl Into<String>,
        story: impl Into<String>,
    ) -> Self {
        Self {
            purpose: purpose.into(),
            technique: technique.into(),
            story: story.into(),
        }
    }

    /// Description used for photos the manifest does not describe.
    pub fn fallback() -> Self {
        Self::new(
            Self::FALLBACK_PURPOSE,
            Self::FALLBACK_TECHNIQUE,
            Self::FALLBACK_STORY,
        )
    }
}

impl Default for PhotoDescription {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Target of the lightbox download button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

/// One photo of the portfolio catalog with its derived metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoItem {
    pub id: ImageId,
    pub file: String,
    pub src: String,
    pub title: String,
    pub category: Category,
    pub meta: String,
    pub description: PhotoDescription,
}

impl PhotoItem {
    /// Build an item from its file name, deriving title, category and meta.
    pub fn from_file(
        id: ImageId,
        image_folder: &str,
        file: &str,
        description: Option<PhotoDescription>,
    ) -> Self {
        Self {
            id,
            file: file.to_string(),
            src: format!("{image_folder}{file}"),
            title: filename_to_title(file),
            category: derive_category(file),
            meta: filename_to_meta(file),
            description: description.unwrap_or_default(),
        }
    }

    /// Meta line for the lightbox, falling back to the category slug.
    pub fn display_meta(&self) -> &str {
        if self.meta.is_empty() {
            self.category.slug()
        } else {
            &self.meta
        }
    }

    pub fn download(&self) -> DownloadLink {
        DownloadLink {
            href: self.src.clone(),
            filename: self.file.clone(),
        }
    }

    /// Case-insensitive search against title and file name.
    ///
    /// `needle` must already be lowercase; an empty needle matches.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.file.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_file_derives_everything() {
        let item =
            PhotoItem::from_file(ImageId(3), "fotos/", "espuma-playa.jpg", None);
        assert_eq!(item.src, "fotos/espuma-playa.jpg");
        assert_eq!(item.title, "Espuma Playa");
        assert_eq!(item.category, Category::Street);
        assert_eq!(item.display_meta(), "playa");
        assert_eq!(item.description, PhotoDescription::fallback());
    }

    #[test]
    fn display_meta_falls_back_to_category() {
        let item =
            PhotoItem::from_file(ImageId(0), "fotos/", "kid-retrato.jpg", None);
        assert_eq!(item.display_meta(), "retrato");
        assert_eq!(
            item.download(),
            DownloadLink {
                href: "fotos/kid-retrato.jpg".into(),
                filename: "kid-retrato.jpg".into(),
            }
        );
    }

    #[test]
    fn search_checks_title_and_file() {
        let item =
            PhotoItem::from_file(ImageId(0), "fotos/", "monta;a-playa.jpg", None);
        assert!(item.matches_search(""));
        assert!(item.matches_search("monta;a"));
        assert!(item.matches_search("a playa"));
        assert!(!item.matches_search("pizza"));
    }
}
