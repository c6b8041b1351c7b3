//! File-name heuristics for portfolio photos.
//!
//! A file such as `retrato_maria-barcelona-2024.jpg` yields the category
//! `retrato`, the title `Retrato Maria Barcelona 2024` and the meta line
//! `barcelona · 2024`. Only whole dash-separated parts count as a year, so
//! `barcelona-2024_01` carries the city alone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::Category;

static EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.[^.]+$").expect("extension regex should compile")
});

static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-_]+").expect("separator regex should compile")
});

// ASCII word rules: accented letters split words, so `niño` becomes `NiñO`.
static WORD_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)([A-Za-z0-9_])").expect("word start regex should compile")
});

static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(19|20)[0-9]{2}$").expect("year regex should compile")
});

static CITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"barcelona|madrid|sevilla|valencia|bilbao|playa")
        .expect("city regex should compile")
});

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digits regex should compile"));

/// Keyword table checked in order; the first hit decides the category.
const CATEGORY_KEYWORDS: &[(&[&str], Category)] = &[
    (&["boda", "casado", "anillo"], Category::Weddings),
    (&["retrato"], Category::Portrait),
    (&["embaraz"], Category::Family),
    (&["playa", "calle"], Category::Street),
    (&["producto", "hamburguesa", "pizza", "marca"], Category::Product),
];

/// File name without its final extension.
pub fn base_name(filename: &str) -> &str {
    match EXTENSION_REGEX.find(filename) {
        Some(ext) => &filename[..ext.start()],
        None => filename,
    }
}

pub fn derive_category(filename: &str) -> Category {
    let name = filename.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| name.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Misc)
}

/// Human title: separators become spaces and every word gets a capital.
pub fn filename_to_title(filename: &str) -> String {
    let spaced = SEPARATOR_REGEX.replace_all(base_name(filename), " ");
    WORD_START_REGEX
        .replace_all(&spaced, |caps: &regex::Captures<'_>| {
            caps[1].to_uppercase()
        })
        .into_owned()
}

/// Location/year line inferred from the dash-separated parts of the name.
///
/// Returns an empty string when neither a city nor a year is present.
pub fn filename_to_meta(filename: &str) -> String {
    let parts: Vec<&str> = base_name(filename).split('-').collect();
    let year = parts.iter().find(|part| YEAR_REGEX.is_match(part));
    let city = parts
        .iter()
        .find(|part| CITY_REGEX.is_match(part))
        .map(|part| DIGITS_REGEX.replace_all(part, "").into_owned())
        .unwrap_or_default();

    [city.as_str(), year.copied().unwrap_or_default()]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_keyword_priority() {
        assert_eq!(derive_category("casados-mirandose.jpg"), Category::Weddings);
        assert_eq!(
            derive_category("manos-casados-anillos.jpg"),
            Category::Weddings
        );
        assert_eq!(derive_category("kid-retrato.jpg"), Category::Portrait);
        assert_eq!(
            derive_category("beso-embarazada-esposos.jpg"),
            Category::Family
        );
        assert_eq!(derive_category("monta;a-playa.jpg"), Category::Street);
        assert_eq!(derive_category("Pizza-Cortando.JPG"), Category::Product);
        assert_eq!(
            derive_category("estructura-carrousel.jpg"),
            Category::Misc
        );
    }

    #[test]
    fn titles_capitalise_each_word() {
        assert_eq!(filename_to_title("foto-retrato.jpg"), "Foto Retrato");
        assert_eq!(
            filename_to_title("retrato_maria-barcelona-2024_01.jpg"),
            "Retrato Maria Barcelona 2024 01"
        );
        assert_eq!(filename_to_title("monta;a-playa.jpg"), "Monta;A Playa");
        assert_eq!(filename_to_title("sin_extension"), "Sin Extension");
        assert_eq!(filename_to_title("niño-feliz.jpg"), "NiñO Feliz");
        assert_eq!(filename_to_title("árbol-2024.jpg"), "áRbol 2024");
    }

    #[test]
    fn meta_combines_city_and_year() {
        assert_eq!(
            filename_to_meta("retrato_maria-barcelona-2024.jpg"),
            "barcelona · 2024"
        );
        assert_eq!(
            filename_to_meta("retrato_maria-barcelona-2024_01.jpg"),
            "barcelona"
        );
        assert_eq!(filename_to_meta("espuma-playa.jpg"), "playa");
        assert_eq!(filename_to_meta("boda-1999.jpg"), "1999");
        assert_eq!(filename_to_meta("madrid2-centro.jpg"), "madrid");
        assert_eq!(filename_to_meta("kid-retrato.jpg"), "");
    }

    #[test]
    fn base_name_only_strips_the_last_extension() {
        assert_eq!(base_name("a.b.jpg"), "a.b");
        assert_eq!(base_name("plain"), "plain");
    }
}
