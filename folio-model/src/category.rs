use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Portfolio category derived from a photo's file name.
///
/// Slugs are the ones used by the site's filter buttons and card badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    #[cfg_attr(feature = "serde", serde(rename = "bodas"))]
    Weddings,
    #[cfg_attr(feature = "serde", serde(rename = "retrato"))]
    Portrait,
    #[cfg_attr(feature = "serde", serde(rename = "familia"))]
    Family,
    #[cfg_attr(feature = "serde", serde(rename = "calle"))]
    Street,
    #[cfg_attr(feature = "serde", serde(rename = "producto"))]
    Product,
    #[cfg_attr(feature = "serde", serde(rename = "varios"))]
    Misc,
}

impl Category {
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[Weddings, Portrait, Family, Street, Product, Misc]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Weddings => "bodas",
            Category::Portrait => "retrato",
            Category::Family => "familia",
            Category::Street => "calle",
            Category::Product => "producto",
            Category::Misc => "varios",
        }
    }

    /// Label shown on filter buttons (slug with a leading capital).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Weddings => "Bodas",
            Category::Portrait => "Retrato",
            Category::Family => "Familia",
            Category::Street => "Calle",
            Category::Product => "Producto",
            Category::Misc => "Varios",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|cat| cat.slug() == needle)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Category selection of the gallery's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// Value of the `data-filter` attribute for this selection.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(cat) => cat.slug(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
