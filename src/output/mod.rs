// ABOUTME: Output module for template-cli
// ABOUTME: Provides the file/stdout sink that rendered templates are written to

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::OutputSink;
