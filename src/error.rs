//! Ошибки конвейера

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Dataset not found at: {}", .path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("Column '{column}' not found in dataset header")]
    MissingColumn { column: String },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Feature '{feature}' has no observed values to compute a median from")]
    AllMissing { feature: String },

    #[error("{0} not fitted")]
    NotFitted(&'static str),

    #[error("Expected {expected} feature columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
