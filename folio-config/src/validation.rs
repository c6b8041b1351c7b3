use folio_model::CatalogManifest;
use thiserror::Error;

use crate::models::PresentationConfig;
use crate::models::surface::SurfaceSettings;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("{surface}.interval_ms must be greater than zero")]
    ZeroInterval { surface: &'static str },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &PresentationConfig,
    manifest: &CatalogManifest,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    for (surface, settings) in config.surfaces() {
        check_surface(surface, settings, &mut warnings)?;
    }

    if manifest.files.is_empty() {
        warnings.push_with_hint(
            "catalog manifest lists no photos; every widget will stay empty",
            "Add file names to `files` or unset catalog.manifest_path for the built-in portfolio",
        );
    }

    let duplicates = manifest.duplicate_files();
    if !duplicates.is_empty() {
        warnings.push_with_hint(
            format!("catalog lists some photos more than once: {}", duplicates.join(", ")),
            "The hero shows each source once; the gallery and fullscreen carousel show every entry",
        );
    }

    for file in manifest.descriptions.keys() {
        if !manifest.files.contains(file) {
            warnings.push(format!(
                "description for `{file}` does not match any catalog file"
            ));
        }
    }

    Ok(warnings)
}

fn check_surface(
    surface: &'static str,
    settings: &SurfaceSettings,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    if settings.interval_ms == 0 {
        return Err(ConfigGuardRailError::ZeroInterval { surface });
    }

    if settings.autoplay && settings.interval_ms <= settings.transition_ms {
        warnings.push_with_hint(
            format!(
                "{surface}: autoplay interval ({} ms) is not longer than the transition ({} ms)",
                settings.interval_ms, settings.transition_ms
            ),
            "Ticks that land inside the transition are dropped; raise interval_ms",
        );
    }

    Ok(())
}
