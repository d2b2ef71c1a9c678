//! Error types for glreport-params

use thiserror::Error;
use std::io;

/// Errors raised while loading a parameter record from disk.
///
/// Normalization itself never fails: malformed selector codes and blank
/// account-type codes resolve to "no restriction" rather than an error.
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Parameter file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid YAML in parameter file")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("IO error")]
    IoError(#[from] io::Error),
}

/// Result type with ParamsError
pub type ParamsResult<T> = Result<T, ParamsError>;
