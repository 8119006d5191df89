//! # BFF Logging
//!
//! Structured logging layer for backend-for-frontend services: a
//! context-aware logger wrapper, an environment-driven configuration
//! factory, and development/production transports.
//!
//! ## Features
//!
//! - **Context Wrappers**: Per-component loggers with labels, prefixes,
//!   child bindings, and request-scoped metadata
//! - **Environment-Driven**: One factory derives the whole logger setup
//!   from runtime settings
//! - **Two Transports**: Pretty console output in development, JSON lines
//!   in production
//! - **Thread Safe**: Designed for concurrent request handling
//!
//! ## Quick start
//!
//! ```
//! use bff_logging::bootstrap;
//! use bff_logging::config::RuntimeSettings;
//!
//! let settings = RuntimeSettings::default();
//! let (sink, main) = bootstrap::init(&settings);
//! main.info("application starting");
//! # drop(sink);
//! ```

pub mod appenders;
pub mod bootstrap;
pub mod config;
pub mod core;
pub mod health;
pub mod macros;

/// Service name stamped onto log records and health reports
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
/// Service version reported by health payloads
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::appenders::{JsonAppender, PrettyAppender};
    pub use crate::config::{
        logger_options, LoggerOptions, PrettyOptions, RequestInfo, ResponseInfo, RuntimeSettings,
    };
    pub use crate::core::{
        Appender, ContextLogger, FieldValue, LogLevel, LogMessage, LogRecord, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Metadata, RequestScope, Result,
        TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::health::HealthReport;
}

pub use appenders::{JsonAppender, PrettyAppender};
pub use core::{
    Appender, ContextLogger, FieldValue, LogLevel, LogMessage, LogRecord, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, Metadata, RequestScope, Result, TimestampFormat,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use health::HealthReport;
