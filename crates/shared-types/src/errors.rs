//! Common error types used across the band-charts crates.
//!
//! The segmentation pipeline itself is total and never fails; errors
//! exist only for configuration validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for band-charts operations
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum BandChartsError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

/// Result type alias for band-charts operations
pub type BandChartsResult<T> = Result<T, BandChartsError>;
