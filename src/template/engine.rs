// ABOUTME: Template engine wrapper around Handlebars
// ABOUTME: Merges a template file against a context into a writer using a charset

use handlebars::Handlebars;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use super::charset::Charset;
use super::context::TemplateContext;
use super::error::{Result, TemplateError};

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a fresh engine for a single invocation
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Missing variables render empty
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Output is written verbatim; escaping is opt-in through the escape tool
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render a template string with the given context
    pub fn render(&mut self, template: &str, context: &TemplateContext) -> Result<String> {
        context.bind_helpers(&mut self.handlebars);
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Read `template_path`, decode it with `charset`, render it against
    /// `context` and write the result to `writer` encoded with `charset`.
    ///
    /// The template is registered under its file name.
    pub fn merge(
        &mut self,
        template_path: &Path,
        charset: Charset,
        context: &TemplateContext,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let name = template_name(template_path);

        let bytes = std::fs::read(template_path).map_err(|source| TemplateError::TemplateRead {
            path: template_path.to_path_buf(),
            source,
        })?;
        let source = charset.decode(&bytes);
        debug!(
            "Loaded template '{}' ({} bytes, {})",
            name,
            bytes.len(),
            charset
        );

        self.handlebars
            .register_template_string(&name, &*source)
            .map_err(|e| TemplateError::SyntaxError {
                name: name.clone(),
                message: e.to_string(),
            })?;

        context.bind_helpers(&mut self.handlebars);
        let rendered = self.handlebars.render(&name, context)?;

        writer.write_all(&charset.encode(&rendered))?;
        debug!("Merged template '{}' ({} chars)", name, rendered.len());
        Ok(())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn template_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
