use folio_model::ModelError;
use thiserror::Error;

/// Errors surfaced while wiring widgets together.
///
/// Navigation itself never fails: invalid requests are silently dropped.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] ModelError),

    #[error("Navigator driver is no longer running")]
    DriverClosed,

    #[error("Navigator driver task failed: {0}")]
    DriverJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, FolioError>;
