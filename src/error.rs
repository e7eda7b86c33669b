//! @ai:module:intent Define error types for the metric pipeline
//! @ai:module:layer domain
//! @ai:module:public_api ReportError, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for input resolution and metric extraction
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no input files supplied")]
    NoInputFiles,

    #[error("no valid CSV files found")]
    EmptyInputSet,

    #[error("missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
