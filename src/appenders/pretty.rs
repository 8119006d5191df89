//! Human-readable console appender for development
//!
//! The development transport: records render as one colorized headline per
//! record, with an indented field dump underneath when structured fields are
//! visible. Production deployments use the JSON appender instead.

use crate::core::{Appender, LogLevel, LogRecord, Result, TimestampFormat};
use colored::Colorize;

/// Default strftime pattern for headline timestamps
pub const DEFAULT_TRANSLATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Render a record's headline message.
///
/// With a non-empty context label the result is `"{context} | {message}"`,
/// otherwise the message alone. An empty label counts as absent.
pub fn format_message(record: &LogRecord) -> String {
    match record.context.as_deref() {
        Some(context) if !context.is_empty() => {
            format!("{} | {}", context, record.message)
        }
        _ => record.message.clone(),
    }
}

/// Appender rendering `[time] LEVEL  context | message` lines.
///
/// Error and Fatal records go to stderr, everything else to stdout. Fields
/// named in `ignore` are suppressed from the dump; when an `include` list is
/// set, only fields named there are dumped at all.
pub struct PrettyAppender {
    colorize: bool,
    translate_time: TimestampFormat,
    single_line: bool,
    ignore: Vec<String>,
    include: Option<Vec<String>>,
}

impl PrettyAppender {
    pub fn new() -> Self {
        Self {
            colorize: true,
            translate_time: TimestampFormat::Custom(DEFAULT_TRANSLATE_TIME.to_string()),
            single_line: false,
            ignore: vec!["pid".to_string(), "hostname".to_string()],
            include: None,
        }
    }

    /// Enable or disable ANSI level colors
    #[must_use]
    pub fn with_colors(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Set the headline timestamp format
    #[must_use]
    pub fn with_translate_time(mut self, format: TimestampFormat) -> Self {
        self.translate_time = format;
        self
    }

    /// Render visible fields on the headline instead of a multi-line dump
    #[must_use]
    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    /// Replace the list of field names suppressed from the dump
    #[must_use]
    pub fn with_ignore<I, S>(mut self, ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = ignore.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the field dump to the named fields
    #[must_use]
    pub fn with_include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(include.into_iter().map(Into::into).collect());
        self
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let timestamp = self.translate_time.format(&record.timestamp);
        let label = format!("{:5}", record.level.label());
        let label = if self.colorize {
            label.color(record.level.color_code()).to_string()
        } else {
            label
        };

        let mut line = format!("[{}] {}  {}", timestamp, label, format_message(record));

        let mut visible: Vec<_> = record
            .fields
            .iter()
            .filter(|(key, _)| !self.ignore.iter().any(|ignored| ignored == *key))
            .filter(|(key, _)| match &self.include {
                None => true,
                Some(included) => included.iter().any(|name| name == *key),
            })
            .collect();
        visible.sort_by(|a, b| a.0.cmp(b.0));

        if self.single_line {
            if !visible.is_empty() {
                let pairs = visible
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect::<Vec<_>>()
                    .join(" ");
                line.push(' ');
                line.push_str(&pairs);
            }
        } else {
            for (key, value) in visible {
                line.push_str(&format!("\n    {}: {}", key, value));
            }
        }

        line
    }
}

impl Default for PrettyAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for PrettyAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.format_line(record);

        // Route Error and Fatal levels to stderr, others to stdout
        match record.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "pretty"
    }
}
