// ABOUTME: Main library module for the template-cli renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod output;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, CliError, InvocationConfig};
pub use output::OutputSink;
pub use template::{Charset, TemplateContext, TemplateEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
