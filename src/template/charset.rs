// ABOUTME: Charset resolution backed by the encoding_rs label registry
// ABOUTME: Decodes template bytes and encodes rendered output

use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE, UTF_8};
use std::borrow::Cow;
use std::fmt;

use super::error::{Result, TemplateError};

/// A text encoding validated against the registry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    /// Whether `label` names an encoding that can round-trip text
    pub fn is_supported(label: &str) -> bool {
        lookup(label).is_some()
    }

    /// Resolve a label such as `utf-8`, `latin1` or `windows-1252`
    pub fn for_name(label: &str) -> Result<Self> {
        lookup(label)
            .map(|encoding| Self { encoding })
            .ok_or_else(|| TemplateError::UnsupportedEncoding(label.to_string()))
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode bytes verbatim; a leading BOM is kept and malformed
    /// sequences become U+FFFD.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        self.encoding.decode_without_bom_handling(bytes).0
    }

    /// Encode text for output. Unmappable characters become numeric
    /// character references, except in UTF-16 which maps everything.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        // encoding_rs only encodes to ASCII-compatible targets
        if self.encoding == UTF_16LE {
            Cow::Owned(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
        } else if self.encoding == UTF_16BE {
            Cow::Owned(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
        } else {
            self.encoding.encode(text).0
        }
    }
}

/// Registry lookup; the replacement encoding decodes everything to U+FFFD
/// and is treated as unknown.
fn lookup(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).filter(|encoding| *encoding != REPLACEMENT)
}

impl Default for Charset {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
