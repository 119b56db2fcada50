// ABOUTME: Top-level error type for the command-line application
// ABOUTME: Maps argument, configuration, and render failures to exit statuses

use thiserror::Error;

use super::{EXIT_FAILURE, EXIT_USAGE};
use crate::template::ContextError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] clap::Error),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid context: {0}")]
    Context(#[from] ContextError),

    #[error("{0:#}")]
    Render(anyhow::Error),
}

impl CliError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(_) | Self::UnsupportedEncoding(_) | Self::Context(_) => EXIT_USAGE,
            Self::Render(_) => EXIT_FAILURE,
        }
    }

    /// Whether the usage text accompanies the diagnostic
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Context(_))
    }
}
