pub mod error;

use std::path::{Path, PathBuf};

use folio_model::CatalogManifest;

use crate::catalog::{ManifestSource, builtin_manifest, load_manifest};
use crate::models::{ConfigSource, PresentationConfig};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

/// Where each piece of a [`ConfigLoad`] came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_source: ConfigSource,
    pub manifest_source: ManifestSource,
    pub env_file_loaded: bool,
}

/// A validated configuration with the catalog it points at.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: PresentationConfig,
    pub manifest: CatalogManifest,
    pub metadata: ConfigMetadata,
    pub warnings: ConfigWarnings,
}

/// Resolves configuration from an optional `.env` file, the environment and
/// the working directory, then applies guard rails.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this `.env` file before reading the environment.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Directory searched for `folio.toml` and friends (defaults to the
    /// working directory).
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Read exactly this file, bypassing the environment lookup.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
                true
            }
            None => false,
        };

        let base_dir = self.base_dir.as_deref().unwrap_or(Path::new("."));
        let (config, config_source) = match &self.config_path {
            Some(path) => (
                PresentationConfig::load_from_file(path)
                    .map_err(ConfigLoadError::Presentation)?,
                ConfigSource::File(path.clone()),
            ),
            None => PresentationConfig::load_from_env_in(base_dir)
                .map_err(ConfigLoadError::Presentation)?,
        };
        tracing::info!(source = %config_source, "presentation config loaded");

        let (manifest, manifest_source) = match &config.catalog.manifest_path {
            Some(path) => {
                let path = if path.is_relative() {
                    base_dir.join(path)
                } else {
                    path.clone()
                };
                (load_manifest(&path)?, ManifestSource::File(path))
            }
            None => (builtin_manifest()?, ManifestSource::Builtin),
        };
        manifest.validate()?;
        tracing::info!(
            source = %manifest_source,
            photos = manifest.files.len(),
            "catalog manifest loaded"
        );

        let warnings = apply_guard_rails(&config, &manifest)?;

        Ok(ConfigLoad {
            config,
            manifest,
            metadata: ConfigMetadata {
                config_source,
                manifest_source,
                env_file_loaded,
            },
            warnings,
        })
    }
}
