use super::super::validation::ConfigGuardRailError;

use folio_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load presentation configuration: {0}")]
    Presentation(#[source] anyhow::Error),
    #[error("failed to read catalog manifest {path}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog manifest {origin}: {source}")]
    ManifestParse {
        origin: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    InvalidManifest(#[from] ModelError),
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
