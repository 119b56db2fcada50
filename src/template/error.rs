// ABOUTME: Error types for template engine operations
// ABOUTME: Defines errors for context parsing and template rendering

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template syntax error in {name}: {message}")]
    SyntaxError { name: String, message: String },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Handlebars error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),
}

/// Errors raised while turning a `k=v,k=v` spec into a context.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContextError {
    #[error("Chunk [{0}] is not a valid entry, expected 'key=value'")]
    MalformedEntry(String),

    #[error("Duplicate key [{0}] found")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
