//! Logger configuration factory
//!
//! Pure derivation of logger options from runtime settings: resolved level,
//! output keys, base fields, serializers, and the transport choice (pretty
//! in development, JSON lines in production). Construction is separate;
//! [`LoggerOptions::build`] turns the options into a running sink.

use super::serializers::Serializers;
use super::settings::RuntimeSettings;
use crate::appenders::{JsonAppender, PrettyAppender};
use crate::core::{LogLevel, Logger, Metadata, TimestampFormat};

/// Output key the message text is emitted under
pub const MESSAGE_KEY: &str = "message";
/// Output key the timestamp is emitted under
pub const TIMESTAMP_KEY: &str = "timestamp";
/// strftime rendering of the development headline timestamp
pub const PRETTY_TRANSLATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Options for the pretty development transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PrettyOptions {
    pub colorize: bool,
    pub message_key: String,
    /// strftime pattern for the headline timestamp
    pub translate_time: String,
    pub single_line: bool,
    /// Field names suppressed from the dump
    pub ignore: Vec<String>,
    /// When set, the field dump is restricted to exactly these names
    pub include: Option<Vec<String>>,
}

/// Complete logger configuration produced by the factory.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub level: LogLevel,
    pub message_key: String,
    pub timestamp_key: String,
    pub timestamp_format: TimestampFormat,
    /// Fields stamped onto every record
    pub base: Metadata,
    pub serializers: Serializers,
    /// Present iff the environment wants human-readable output
    pub pretty: Option<PrettyOptions>,
}

/// Derive logger options from runtime settings.
///
/// The level falls back to `Info` when the configured name does not parse.
/// Every environment other than `"production"` gets the pretty transport;
/// unless verbose output was requested its field dump is restricted to the
/// headline properties, keeping development lines clean.
pub fn logger_options(settings: &RuntimeSettings) -> LoggerOptions {
    let level = settings.log_level.parse().unwrap_or(LogLevel::Info);

    let pretty = if settings.is_production() {
        None
    } else {
        let include = if settings.is_verbose() {
            None
        } else {
            Some(
                ["level", "name", "message", "timestamp"]
                    .map(String::from)
                    .to_vec(),
            )
        };

        Some(PrettyOptions {
            colorize: true,
            message_key: MESSAGE_KEY.to_string(),
            translate_time: PRETTY_TRANSLATE_TIME.to_string(),
            single_line: false,
            ignore: vec!["pid".to_string(), "hostname".to_string()],
            include,
        })
    };

    LoggerOptions {
        level,
        message_key: MESSAGE_KEY.to_string(),
        timestamp_key: TIMESTAMP_KEY.to_string(),
        timestamp_format: TimestampFormat::Iso8601,
        base: Metadata::new()
            .with("environment", settings.environment.clone())
            .with("service", crate::SERVICE_NAME),
        serializers: Serializers::default(),
        pretty,
    }
}

impl LoggerOptions {
    /// Construct the sink this configuration describes.
    pub fn build(self) -> Logger {
        let builder = Logger::builder().min_level(self.level).base(self.base);

        match self.pretty {
            Some(options) => {
                let mut appender = PrettyAppender::new()
                    .with_colors(options.colorize)
                    .with_translate_time(TimestampFormat::Custom(options.translate_time))
                    .with_single_line(options.single_line)
                    .with_ignore(options.ignore);
                if let Some(include) = options.include {
                    appender = appender.with_include(include);
                }
                builder.appender(appender).build()
            }
            None => builder
                .appender(
                    JsonAppender::stdout()
                        .with_message_key(self.message_key)
                        .with_timestamp_key(self.timestamp_key)
                        .with_timestamp_format(self.timestamp_format),
                )
                .build(),
        }
    }
}
