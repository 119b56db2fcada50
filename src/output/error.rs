// ABOUTME: Error types for output sink operations
// ABOUTME: Defines errors for opening and closing the render destination

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to open output file {path}: {source}")]
    OpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to close {destination}: {source}")]
    CloseError {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
