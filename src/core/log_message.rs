//! Log message argument shapes
//!
//! Logging calls accept either a plain text message, a structured metadata
//! object, or the structured-first shape (metadata followed by a text
//! message). `LogMessage` makes those three shapes an exhaustive sum type,
//! so the prefix-formatting rule is checked by the compiler instead of
//! probing argument types at runtime.

use super::metadata::Metadata;

/// One logging call's payload
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    /// Bare text message
    Plain(String),
    /// Structured fields with no message text
    Fields(Metadata),
    /// Structured fields followed by a text message
    WithFields(Metadata, String),
}

impl LogMessage {
    /// The message text, if this shape carries one
    pub fn text(&self) -> Option<&str> {
        match self {
            LogMessage::Plain(text) => Some(text),
            LogMessage::Fields(_) => None,
            LogMessage::WithFields(_, text) => Some(text),
        }
    }

    /// The structured fields, if this shape carries any
    pub fn fields(&self) -> Option<&Metadata> {
        match self {
            LogMessage::Plain(_) => None,
            LogMessage::Fields(fields) | LogMessage::WithFields(fields, _) => Some(fields),
        }
    }

    /// Apply a message prefix.
    ///
    /// Text-bearing shapes get `"[prefix] "` inserted before the original
    /// text; the fields-only shape passes through unchanged, and attached
    /// fields are never touched.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            LogMessage::Plain(text) => LogMessage::Plain(format!("[{}] {}", prefix, text)),
            LogMessage::Fields(fields) => LogMessage::Fields(fields),
            LogMessage::WithFields(fields, text) => {
                LogMessage::WithFields(fields, format!("[{}] {}", prefix, text))
            }
        }
    }

    /// Split into the record's message text and structured fields.
    ///
    /// The fields-only shape yields an empty message, mirroring how the
    /// pretty formatter treats an absent message field.
    pub fn into_parts(self) -> (String, Metadata) {
        match self {
            LogMessage::Plain(text) => (text, Metadata::new()),
            LogMessage::Fields(fields) => (String::new(), fields),
            LogMessage::WithFields(fields, text) => (text, fields),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Plain(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Plain(text)
    }
}

impl From<&String> for LogMessage {
    fn from(text: &String) -> Self {
        LogMessage::Plain(text.clone())
    }
}

impl From<Metadata> for LogMessage {
    fn from(fields: Metadata) -> Self {
        LogMessage::Fields(fields)
    }
}

impl From<(Metadata, &str)> for LogMessage {
    fn from((fields, text): (Metadata, &str)) -> Self {
        LogMessage::WithFields(fields, text.to_string())
    }
}

impl From<(Metadata, String)> for LogMessage {
    fn from((fields, text): (Metadata, String)) -> Self {
        LogMessage::WithFields(fields, text)
    }
}
