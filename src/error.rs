//! # Error Types
//!
//! Every failure the reader-printer can hit is one variant of [`ReadError`].
//! None of them are recoverable; they travel up with `?` and end the run.

use thiserror::Error;

/// Errors that can occur while opening, reading, or printing a variable
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to open NetCDF file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: netcdf::Error,
    },

    #[error("Failed to close NetCDF file '{path}': {source}")]
    Close {
        path: String,
        #[source]
        source: netcdf::Error,
    },

    #[error("Variable '{0}' not found in NetCDF file")]
    VariableNotFound(String),

    #[error("Variable '{name}' must have exactly 2 dimensions, found {found}")]
    Shape { name: String, found: usize },

    #[error("Failed to read variable '{name}': {reason}")]
    Read { name: String, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for reader-printer operations
pub type ReadResult<T> = Result<T, ReadError>;

impl ReadError {
    /// Builds a [`ReadError::Read`] from anything printable.
    pub fn read(name: &str, reason: impl std::fmt::Display) -> Self {
        ReadError::Read {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
