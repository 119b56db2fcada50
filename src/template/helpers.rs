// ABOUTME: Escape helper exposed to templates under a user-chosen name
// ABOUTME: Implements HTML, XML, URL, JavaScript, Java and SQL escaping plus literal constants

use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value as JsonValue;

/// Characters left untouched by form encoding: `A-Za-z0-9 . - * _`
const FORM_URLENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');

/// Escape helper - `{{esc "html" value}}` or `{{esc "dollar"}}`
pub fn escape_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let method = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| {
            RenderError::new(format!(
                "{} helper requires a method name parameter",
                h.name()
            ))
        })?;

    if let Some(constant) = constant(method) {
        out.write(constant)?;
        return Ok(());
    }

    let input = match h.param(1).map(|v| v.value()) {
        None | Some(JsonValue::Null) => return Ok(()),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let escaped = escape(method, &input)
        .ok_or_else(|| RenderError::new(format!("Unknown escape method: {}", method)))?;
    out.write(&escaped)?;
    Ok(())
}

/// Apply the named escaping to `input`, or `None` for an unknown method
pub fn escape(method: &str, input: &str) -> Option<String> {
    let escaped = match method {
        "html" => html_escape::encode_double_quoted_attribute(input).into_owned(),
        "xml" => html_escape::encode_quoted_attribute(input).into_owned(),
        "url" => url(input),
        "unurl" => unurl(input),
        "javascript" => backslash_escape(input, true),
        "java" => backslash_escape(input, false),
        "sql" => input.replace('\'', "''"),
        _ => return None,
    };
    Some(escaped)
}

/// Literal values for characters that are awkward to write in a template
pub fn constant(name: &str) -> Option<&'static str> {
    let value = match name {
        "dollar" | "d" => "$",
        "hash" | "h" => "#",
        "backslash" | "b" => "\\",
        "quote" | "q" => "\"",
        "singleQuote" | "s" => "'",
        "newline" | "n" => "\n",
        "exclamation" | "e" => "!",
        _ => return None,
    };
    Some(value)
}

fn url(input: &str) -> String {
    utf8_percent_encode(input, FORM_URLENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

fn unurl(input: &str) -> String {
    percent_decode_str(&input.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

fn backslash_escape(input: &str, javascript: bool) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\'' if javascript => escaped.push_str("\\'"),
            '/' if javascript => escaped.push_str("\\/"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
