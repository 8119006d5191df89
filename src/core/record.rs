//! Log record structure

use super::log_level::LogLevel;
use super::metadata::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One emitted log record, produced per logging call and consumed
/// immediately by the sink's appenders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Label of the logical component that emitted the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Structured fields attached to this record
    #[serde(skip_serializing_if = "Metadata::is_empty", default)]
    pub fields: Metadata,
}

impl LogRecord {
    /// Sanitize message text to prevent log injection attacks.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a crafted message cannot fake additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            context: None,
            fields: Metadata::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_fields(mut self, fields: Metadata) -> Self {
        self.fields = fields;
        self
    }
}
