//! Error types for the forecast_sales crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the forecast_sales crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Required columns are missing from the input table
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// No valid rows remain after cleaning
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// The regression has no unique solution for the given data
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// The selected product is not present in the cleaned data
    #[error("Selection error: {0}")]
    SelectionError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),

    /// Error from serializing or deserializing a model artifact
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<polars::prelude::PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}
