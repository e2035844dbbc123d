//! Error types for the embed pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Failed to read input {path:?}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {path:?}: {source}")]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Compression failed: {0}")]
    Compression(#[from] std::io::Error),

    #[error("Invalid identifier {0:?}: must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdentifier(String),
}
