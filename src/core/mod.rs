//! Core logger types and traits

pub mod appender;
pub mod context_logger;
pub mod error;
pub mod log_level;
pub mod log_message;
pub mod logger;
pub mod metadata;
pub mod metrics;
pub mod record;
pub mod scope;
pub mod timestamp;

pub use appender::Appender;
pub use context_logger::ContextLogger;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metadata::{FieldValue, Metadata};
pub use metrics::LoggerMetrics;
pub use record::LogRecord;
pub use scope::RequestScope;
pub use timestamp::TimestampFormat;
