// ABOUTME: Main application orchestration for template-cli
// ABOUTME: Coordinates logging, argument resolution, rendering, and exit statuses

use anyhow::Result;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::args::{Action, Args};
use super::commands;
use super::config::LoggingConfig;
use super::error::CliError;
use super::EXIT_SUCCESS;

pub struct App {
    logging: LoggingConfig,
}

impl App {
    /// Create a new application instance
    pub fn new(logging: LoggingConfig) -> Self {
        Self { logging }
    }

    /// Initialize logging to stderr; `RUST_LOG` overrides the configured level
    pub fn init_logging(&self) -> Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", self.logging.level);
        Ok(())
    }

    /// Run against the process streams and return the exit status
    pub fn run<I, T>(&self, tokens: I) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if let Err(e) = self.init_logging() {
            eprintln!("warning: {:#}", e);
        }

        self.dispatch(tokens, &mut io::stdout(), &mut io::stderr())
    }

    /// Resolve `tokens`, perform the action, and report failures.
    ///
    /// About and help text go to `out`; usage and diagnostics go to `err`.
    /// Rendered output goes to the sink named by the command line.
    pub fn dispatch<I, T>(&self, tokens: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let outcome = Args::resolve(tokens).and_then(|action| match action {
            Action::About => {
                let _ = write!(out, "{}", Args::about_text());
                Ok(EXIT_SUCCESS)
            }
            Action::Help { status } => {
                let _ = writeln!(out, "{}", Args::usage());
                Ok(status)
            }
            Action::Invoke(config) => commands::render(config).map(|()| EXIT_SUCCESS),
        });
        let _ = out.flush();

        match outcome {
            Ok(status) => status,
            Err(e) => {
                report(&e, err);
                e.exit_code()
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(LoggingConfig::default())
    }
}

fn report(e: &CliError, err: &mut dyn Write) {
    debug!("Invocation failed: {}", e);
    if e.shows_usage() {
        let _ = writeln!(err, "{}", Args::usage());
    }
    let _ = writeln!(err, "error: {}", e.to_string().trim_start_matches("error: "));
    let _ = err.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn dispatch(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();
        let tokens = std::iter::once("template-cli").chain(args.iter().copied());
        let status = App::default().dispatch(tokens, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_about() {
        let (status, out, err) = dispatch(&["-a"]);
        assert_eq!(status, 0);
        assert!(out.contains("template-cli"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_about_ignores_missing_template() {
        let (status, _, _) = dispatch(&["-a", "-c", "a=b", "-t", "/definitely/missing.hbs"]);
        assert_eq!(status, 0);
    }

    #[test]
    fn test_help_statuses() {
        let (status, out, _) = dispatch(&["-h"]);
        assert_eq!(status, 0);
        assert!(out.contains("--template"));

        let (status, out, _) = dispatch(&["-h", "-c", "a=b", "-t", "x.hbs"]);
        assert_eq!(status, -2);
        assert!(out.contains("--context"));
    }

    #[test]
    fn test_parse_error_prints_usage_to_stderr() {
        let (status, out, err) = dispatch(&["-c", "a=b"]);
        assert_eq!(status, -1);
        assert!(out.is_empty());
        assert!(err.contains("Usage:"));
        assert!(err.contains("error:"));
    }

    #[test]
    fn test_unsupported_encoding() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let (status, out, err) = dispatch(&[
            "-c",
            "a=b",
            "-t",
            "x.hbs",
            "-o",
            output.to_str().unwrap(),
            "-e",
            "not-a-real-charset",
        ]);

        assert_eq!(status, -1);
        assert!(out.is_empty());
        assert!(err.contains("not-a-real-charset"));
        assert!(!err.contains("Usage:"));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_context() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("t.hbs");
        fs::write(&template, "{{a}}").unwrap();

        let (status, _, err) = dispatch(&["-c", "a", "-t", template.to_str().unwrap()]);
        assert_eq!(status, -1);
        assert!(err.contains("Usage:"));
        assert!(err.contains("Chunk [a]"));
    }

    #[test]
    fn test_render_success() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("greet.hbs");
        let output = dir.path().join("greet.txt");
        fs::write(&template, "Hello, {{name}}!").unwrap();

        let (status, out, err) = dispatch(&[
            "-c",
            "name=World",
            "-t",
            template.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);

        assert_eq!(status, 0);
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(fs::read_to_string(&output).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_render_failure() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let (status, _, err) = dispatch(&[
            "-c",
            "a=b",
            "-t",
            dir.path().join("missing.hbs").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);

        assert_eq!(status, 1);
        assert!(err.contains("missing.hbs"));
        assert!(!err.contains("Usage:"));
    }
}
