// ABOUTME: Template module for template-cli
// ABOUTME: Provides context construction, charsets, the escape helper, and the render engine

pub mod charset;
pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use charset::Charset;
pub use context::{ContextValue, TemplateContext};
pub use engine::TemplateEngine;
pub use error::{ContextError, Result, TemplateError};
