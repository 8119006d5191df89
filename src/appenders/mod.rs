//! Appender implementations

pub mod json;
pub mod pretty;

pub use json::{JsonAppender, DEFAULT_MESSAGE_KEY, DEFAULT_TIMESTAMP_KEY};
pub use pretty::{format_message, PrettyAppender, DEFAULT_TRANSLATE_TIME};

// Re-export the trait so appender users need only this module
pub use crate::core::Appender;
