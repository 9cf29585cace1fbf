//! Attempt-set file error types.
//!
//! Typed here so callers can match on the failure kind instead of string
//! matching; the CLI wraps these with `anyhow` context at the edge.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading attempt-set files.
#[derive(Debug, Error)]
pub enum AttemptSetError {
    /// The file could not be read.
    #[error("failed to read attempt set file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was not valid attempt-set TOML.
    #[error("failed to parse attempt set TOML: {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A directory was expected but the path is not one.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
