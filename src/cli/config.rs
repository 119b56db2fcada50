// ABOUTME: Configuration records for template-cli
// ABOUTME: Holds the per-run invocation settings and the logging setup

use std::path::PathBuf;

use crate::template::Charset;

/// Everything one render needs, resolved from the command line.
///
/// Built once per run and moved into the render pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    pub template: PathBuf,
    pub output: Option<PathBuf>,
    pub charset: Charset,
    /// Raw `key=value[,key=value]*` spec, parsed by the pipeline
    pub context: String,
    pub escape_tool: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
