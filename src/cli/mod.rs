// ABOUTME: CLI module for template-cli
// ABOUTME: Exports argument resolution and the application entry point

pub mod app;
pub mod args;
pub mod commands;
pub mod config;
pub mod error;

pub use app::App;
pub use args::{Action, Args};
pub use config::{InvocationConfig, LoggingConfig};
pub use error::CliError;

/// Success, or about/help satisfied
pub const EXIT_SUCCESS: i32 = 0;
/// Render or write failure
pub const EXIT_FAILURE: i32 = 1;
/// Parse error, unsupported encoding, or invalid argument
pub const EXIT_USAGE: i32 = -1;
/// Help requested on an otherwise valid command line
pub const EXIT_HELP: i32 = -2;
