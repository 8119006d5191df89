//! Timestamp formatting utilities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format for log output
///
/// Structured records carry ISO 8601 timestamps; the pretty transport
/// translates them to a display format via a strftime pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// Custom strftime format, e.g. `%Y-%m-%d %H:%M:%S`
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
