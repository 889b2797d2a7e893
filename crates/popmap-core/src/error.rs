// crates/popmap-core/src/error.rs
use thiserror::Error;

use crate::model::Year;

/// Errors produced while loading a dataset, configuring a map or applying a
/// fetched layer.
#[derive(Debug, Error)]
pub enum PopMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    /// The document parsed as JSON but is not a usable city dataset.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid year range: min {min} is greater than max {max}")]
    InvalidRange { min: Year, max: Year },

    /// Network error or non-success response while fetching the dataset.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PopMapError>;
