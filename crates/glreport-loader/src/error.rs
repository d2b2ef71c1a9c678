//! Error types for glreport-loader

use thiserror::Error;
use std::io;

/// Errors raised while materializing an input relation.
///
/// The report core itself never fails; any fault with the input data
/// surfaces here, at the loading boundary.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed CSV input")]
    Csv(#[from] csv::Error),

    #[error("IO error")]
    IoError(#[from] io::Error),
}

/// Result type with LoaderError
pub type LoaderResult<T> = Result<T, LoaderError>;
