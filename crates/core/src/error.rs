//! Error types for powersmart-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for powersmart-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can take down a dataset load.
///
/// All variants are load errors in the eyes of the dashboard: any of them
/// switches every chart container into the error state. Per-cell numeric
/// coercion failures are deliberately not represented here; see
/// [`crate::data::Dataset::coercion_anomalies`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Dataset request failed: HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Failed to decode dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),
}
