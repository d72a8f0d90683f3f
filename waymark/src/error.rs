//! Error types used by the crate.

use thiserror::Error;

/// Waymark error type.
#[derive(Debug, Error)]
pub enum WaymarkError {
    /// Item not found.
    #[error("item not found")]
    NotFound,
    /// The geometry has no vertex path to report on.
    #[error("unsupported geometry")]
    UnsupportedGeometry,
    /// A vertex could not be converted to geographic coordinates.
    #[error("failed to project vertex")]
    Projection,
    /// I/O error (network or file).
    #[error("failed to load data")]
    IO,
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for WaymarkError {
    fn from(_value: reqwest::Error) -> Self {
        Self::IO
    }
}

impl From<serde_json::Error> for WaymarkError {
    fn from(value: serde_json::Error) -> Self {
        Self::Generic(format!("failed to decode data: {value}"))
    }
}
