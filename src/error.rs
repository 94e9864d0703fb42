//! Error types for chart construction and data loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Malformed dataframe (missing or mismatched columns, duplicate ids).
    #[error("schema error: {0}")]
    Schema(String),

    /// Top-level document has the wrong shape.
    #[error("format error: {0}")]
    Format(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
