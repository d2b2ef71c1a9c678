//! Error types for glreport-export

use thiserror::Error;
use std::io;

/// Errors raised while writing the rendered report
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write error")]
    Csv(#[from] csv::Error),

    #[error("IO error")]
    IoError(#[from] io::Error),
}

/// Result type with ExportError
pub type ExportResult<T> = Result<T, ExportError>;
