pub mod surface;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use surface::{SurfaceOverrides, SurfaceSettings};

pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "FOLIO_CONFIG_JSON";

/// Source that produced the presentation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "built-in defaults"),
            ConfigSource::EnvPath(path) => {
                write!(f, "${CONFIG_PATH_ENV} ({})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_JSON_ENV}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// TOML or JSON catalog manifest. The built-in portfolio is used when
    /// unset.
    pub manifest_path: Option<PathBuf>,
}

/// Timings of every widget plus the catalog to present.
///
/// Each surface section may be partial: missing fields fall back to that
/// surface's defaults, not to another surface's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPresentationConfig")]
pub struct PresentationConfig {
    pub hero: SurfaceSettings,
    pub fullscreen: SurfaceSettings,
    pub lightbox: SurfaceSettings,
    pub catalog: CatalogSettings,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            hero: SurfaceSettings::hero(),
            fullscreen: SurfaceSettings::fullscreen(),
            lightbox: SurfaceSettings::lightbox(),
            catalog: CatalogSettings::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPresentationConfig {
    hero: SurfaceOverrides,
    fullscreen: SurfaceOverrides,
    lightbox: SurfaceOverrides,
    catalog: CatalogSettings,
}

impl From<RawPresentationConfig> for PresentationConfig {
    fn from(raw: RawPresentationConfig) -> Self {
        Self {
            hero: SurfaceSettings::hero().apply(raw.hero),
            fullscreen: SurfaceSettings::fullscreen().apply(raw.fullscreen),
            lightbox: SurfaceSettings::lightbox().apply(raw.lightbox),
            catalog: raw.catalog,
        }
    }
}

impl PresentationConfig {
    /// Named surfaces in a stable order, for reporting.
    pub fn surfaces(&self) -> [(&'static str, &SurfaceSettings); 3] {
        [
            ("hero", &self.hero),
            ("fullscreen", &self.fullscreen),
            ("lightbox", &self.lightbox),
        ]
    }

    /// Load configuration using environment variables and well-known files.
    /// Evaluation order:
    /// 1) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$FOLIO_CONFIG_JSON` (inline JSON),
    /// 3) `folio.toml`, `folio.json` or `config/folio.toml` in the working
    ///    directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_from_env_in(Path::new("."))
    }

    /// Same as [`load_from_env`](Self::load_from_env) with default files
    /// resolved against `dir`.
    pub fn load_from_env_in(dir: &Path) -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read presentation config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid presentation config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid presentation config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse presentation config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid presentation config json: {err}"))
    }

    fn find_default_file(dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] =
            &["folio.toml", "folio.json", "config/folio.toml"];

        CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sections_keep_their_own_defaults() {
        let config = PresentationConfig::parse_from_str(
            "[hero]\ninterval_ms = 7000\n\n[fullscreen]\nautoplay = true\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.hero.interval_ms, 7_000);
        assert_eq!(config.hero.transition_ms, 900);
        assert!(config.hero.autoplay);
        assert!(config.fullscreen.autoplay);
        assert_eq!(config.fullscreen.interval_ms, 6_000);
        assert_eq!(config.lightbox, SurfaceSettings::lightbox());
    }

    #[test]
    fn json_is_accepted_when_toml_fails() {
        let config = PresentationConfig::parse_from_str(
            r#"{ "lightbox": { "transition_ms": 150 } }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.lightbox.transition_ms, 150);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PresentationConfig::parse_json(r#"{ "hero": { "speed": 2 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn settings_convert_to_timings() {
        let options = SurfaceSettings::hero().carousel_options();
        assert!(options.autoplay);
        assert_eq!(options.timing.interval().as_millis(), 5_000);
    }
}
