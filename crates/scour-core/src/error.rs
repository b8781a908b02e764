//! Errors raised at the dataset I/O and configuration boundary.
//!
//! The pipeline stages themselves never fail; only loading and writing files
//! or reading configuration can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input shape in {}: expected {expected}, found {found}", path.display())]
    InvalidShape {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("invalid configuration")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
