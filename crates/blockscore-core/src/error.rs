// crates/blockscore-core/src/error.rs

use thiserror::Error;

use crate::stats::InsufficientDataError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    InsufficientData(#[from] InsufficientDataError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
