use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
