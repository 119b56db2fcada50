// ABOUTME: Render pipeline for the template-cli command
// ABOUTME: Builds the context and merges the template into the output sink

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use super::config::InvocationConfig;
use super::error::CliError;
use crate::output::OutputSink;
use crate::template::{TemplateContext, TemplateEngine, TemplateError};

/// Render the template described by `config`.
///
/// Context errors surface as [`CliError::Context`] before any output is
/// opened; everything after that is a [`CliError::Render`].
pub fn render(config: InvocationConfig) -> std::result::Result<(), CliError> {
    info!("Rendering template: {}", config.template.display());

    let mut context = TemplateContext::parse(&config.context)?;
    if let Some(name) = &config.escape_tool {
        context.insert_escape_tool(name.as_str());
    }
    debug!("Context keys: {:?}", context.keys().collect::<Vec<_>>());

    let mut engine = TemplateEngine::new();
    merge(&mut engine, &config, &context).map_err(CliError::Render)?;

    info!("Template rendering completed");
    Ok(())
}

fn merge(
    engine: &mut TemplateEngine,
    config: &InvocationConfig,
    context: &TemplateContext,
) -> Result<()> {
    let mut sink = OutputSink::open(config.output.as_deref()).context("Failed to open output")?;

    // Flush here so buffered write failures are render failures
    let merged = engine
        .merge(&config.template, config.charset, context, &mut sink)
        .and_then(|()| sink.flush().map_err(TemplateError::IoError))
        .with_context(|| {
            format!(
                "Failed to render {} to {}",
                config.template.display(),
                sink.describe()
            )
        });

    // Close failures are not escalated
    if let Err(e) = sink.close() {
        debug!("Ignoring output close failure: {}", e);
    }

    merged
}
