// ABOUTME: Template context built from the command-line context spec
// ABOUTME: Maps keys to text values or to the injectable escape helper

use handlebars::Handlebars;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use tracing::debug;

use super::error::ContextError;
use super::helpers;

const PAIR_SEPARATOR: char = ',';
const KEY_VALUE_SEPARATOR: char = '=';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    Text(String),
    EscapeTool,
}

/// Named values exposed to a template during rendering.
///
/// Text entries serialize as top-level string variables. Escape tool entries
/// are not data; they become helpers when the context is bound to an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    entries: HashMap<String, ContextValue>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key=value[,key=value]*` spec.
    ///
    /// Each chunk must split into exactly one key and one value. Keys and
    /// values cannot contain `,` or `=`; there is no escaping.
    pub fn parse(spec: &str) -> std::result::Result<Self, ContextError> {
        let mut entries = HashMap::new();

        for chunk in spec.split(PAIR_SEPARATOR) {
            let mut parts = chunk.split(KEY_VALUE_SEPARATOR);
            let (key, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => (key, value),
                _ => return Err(ContextError::MalformedEntry(chunk.to_string())),
            };

            if entries.contains_key(key) {
                return Err(ContextError::DuplicateKey(key.to_string()));
            }
            entries.insert(key.to_string(), ContextValue::Text(value.to_string()));
        }

        debug!("Parsed {} context entries", entries.len());
        Ok(Self { entries })
    }

    /// Add or replace a text variable
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), ContextValue::Text(value.into()));
    }

    /// Expose the escape helper under `name`, replacing any value stored there
    pub fn insert_escape_tool(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), ContextValue::EscapeTool);
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.get(key)
    }

    /// Get a text variable value
    pub fn get_variable(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(ContextValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Register a helper for every escape tool entry
    pub fn bind_helpers(&self, handlebars: &mut Handlebars) {
        for (name, value) in &self.entries {
            if let ContextValue::EscapeTool = value {
                debug!("Registering escape tool as '{}'", name);
                handlebars.register_helper(name, Box::new(helpers::escape_helper));
            }
        }
    }
}

impl Serialize for TemplateContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.entries {
            if let ContextValue::Text(text) = value {
                map.serialize_entry(key, text)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_spec() {
        let context = TemplateContext::parse("env=production,version=1.0.0,debug=true").unwrap();

        assert_eq!(context.len(), 3);
        assert_eq!(context.get_variable("env"), Some("production"));
        assert_eq!(context.get_variable("version"), Some("1.0.0"));
        assert_eq!(context.get_variable("debug"), Some("true"));
    }

    #[test]
    fn test_parse_is_order_independent() {
        let a = TemplateContext::parse("a=1,b=2").unwrap();
        let b = TemplateContext::parse("b=2,a=1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_single_pair() {
        let context = TemplateContext::parse("name=World").unwrap();
        assert_eq!(context.keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_parse_keeps_whitespace_and_empty_parts() {
        let context = TemplateContext::parse(" padded = yes ,=anonymous,blank=").unwrap();

        assert_eq!(context.get_variable(" padded "), Some(" yes "));
        assert_eq!(context.get_variable(""), Some("anonymous"));
        assert_eq!(context.get_variable("blank"), Some(""));
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(
            TemplateContext::parse("name=World,invalid_format"),
            Err(ContextError::MalformedEntry("invalid_format".to_string()))
        );
    }

    #[test]
    fn test_parse_extra_separator() {
        assert_eq!(
            TemplateContext::parse("a=b=c"),
            Err(ContextError::MalformedEntry("a=b=c".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_spec_and_trailing_comma() {
        assert!(TemplateContext::parse("").is_err());
        assert!(TemplateContext::parse("a=1,").is_err());
    }

    #[test]
    fn test_parse_duplicate_key() {
        assert_eq!(
            TemplateContext::parse("a=1,a=2"),
            Err(ContextError::DuplicateKey("a".to_string()))
        );
    }

    #[test]
    fn test_escape_tool_replaces_text_value() {
        let mut context = TemplateContext::parse("esc=plain,name=World").unwrap();
        context.insert_escape_tool("esc");

        assert_eq!(context.get("esc"), Some(&ContextValue::EscapeTool));
        assert_eq!(context.get_variable("esc"), None);
        assert_eq!(context.len(), 2);
    }

    #[test]
    fn test_serialize_skips_escape_tool() {
        let mut context = TemplateContext::new();
        context.set_variable("name", "World");
        context.insert_escape_tool("esc");

        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "World" }));
    }
}
