//! JSON lines appender for structured output
//!
//! The production transport: each record becomes a single-line JSON object,
//! compatible with log aggregation tools like ELK, Loki, etc.

use crate::core::{Appender, LogRecord, Result, TimestampFormat};
use serde_json::{Map, Value};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default key the message text is emitted under
pub const DEFAULT_MESSAGE_KEY: &str = "msg";
/// Default key the timestamp is emitted under
pub const DEFAULT_TIMESTAMP_KEY: &str = "time";

/// Appender writing one JSON object per line.
///
/// Structured fields are flattened into the top level of the object; the
/// severity name, timestamp, context label, and message are written under
/// reserved keys that win over colliding field names. The message key is
/// omitted entirely for records with no message text, so a fields-only
/// logging call emits a pure data object.
pub struct JsonAppender {
    writer: Box<dyn Write + Send + Sync>,
    message_key: String,
    timestamp_key: String,
    timestamp_format: TimestampFormat,
}

impl JsonAppender {
    /// Create an appender writing to stdout.
    pub fn stdout() -> Self {
        Self::writer(io::stdout())
    }

    /// Create an appender appending to a file.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::writer(BufWriter::new(file)))
    }

    /// Create an appender over an arbitrary writer.
    pub fn writer<W: Write + Send + Sync + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            timestamp_key: DEFAULT_TIMESTAMP_KEY.to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the key the message text is emitted under
    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    /// Set the key the timestamp is emitted under
    #[must_use]
    pub fn with_timestamp_key(mut self, key: impl Into<String>) -> Self {
        self.timestamp_key = key.into();
        self
    }

    /// Set the timestamp rendering format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn encode(&self, record: &LogRecord) -> Result<String> {
        let mut object = Map::new();

        // Fields first so reserved keys win on collision
        for (key, value) in record.fields.iter() {
            object.insert(key.clone(), value.to_json_value());
        }

        object.insert(
            "level".to_string(),
            Value::String(record.level.as_str().to_string()),
        );
        object.insert(
            self.timestamp_key.clone(),
            Value::String(self.timestamp_format.format(&record.timestamp)),
        );
        if let Some(context) = &record.context {
            object.insert("context".to_string(), Value::String(context.clone()));
        }
        if !record.message.is_empty() {
            object.insert(
                self.message_key.clone(),
                Value::String(record.message.clone()),
            );
        }

        Ok(serde_json::to_string(&Value::Object(object))?)
    }
}

impl Appender for JsonAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.encode(record)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
