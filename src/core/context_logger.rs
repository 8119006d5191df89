//! Per-component logger wrapper
//!
//! Application components do not talk to the sink directly. Each holds a
//! `ContextLogger`: a thin decorator over a shared [`Logger`] that stamps
//! records with the component's context label, applies an optional message
//! prefix, carries child bindings, and merges request-scoped metadata.
//! Wrappers are cheap to clone and construct; all heavy state lives in the
//! shared sink.

use super::{
    error::Result,
    log_level::LogLevel,
    log_message::LogMessage,
    logger::Logger,
    metadata::Metadata,
    record::LogRecord,
    scope::RequestScope,
};
use std::sync::Arc;

/// Component-scoped logging handle over a shared sink.
///
/// # Example
///
/// ```
/// use bff_logging::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(Logger::builder().build());
/// let mut logger = ContextLogger::with_context(Arc::clone(&sink), "PaymentService");
/// logger.set_prefix("worker-1");
///
/// logger.info("processing started");
/// logger.warn((Metadata::new().with("attempt", 2), "retrying"));
/// ```
#[derive(Clone)]
pub struct ContextLogger {
    sink: Arc<Logger>,
    context: Option<String>,
    prefix: Option<String>,
    /// Fields merged into every record this wrapper emits
    bindings: Metadata,
    scope: Option<RequestScope>,
}

impl ContextLogger {
    /// Create a wrapper with no context label.
    pub fn new(sink: Arc<Logger>) -> Self {
        Self {
            sink,
            context: None,
            prefix: None,
            bindings: Metadata::new(),
            scope: None,
        }
    }

    /// Create a wrapper labeled with a component context.
    pub fn with_context(sink: Arc<Logger>, context: impl Into<String>) -> Self {
        let mut logger = Self::new(sink);
        logger.set_context(context);
        logger
    }

    /// Set the context label attached to every record.
    ///
    /// Calling again replaces the label; setting the same value twice is a
    /// no-op in effect.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Set the message prefix. Text messages emitted afterwards are
    /// formatted as `"[prefix] text"`. The empty string clears the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Shared sink this wrapper emits through.
    pub fn sink(&self) -> &Arc<Logger> {
        &self.sink
    }

    /// Emit one record at the given severity.
    ///
    /// This is the single path every severity method goes through: the
    /// prefix is applied to the message text (structured fields are never
    /// touched, and the fields-only shape is never prefixed), then scope
    /// fields and child bindings are merged in. On key collision per-call
    /// fields win over scope fields, which win over bindings.
    pub fn emit(&self, level: LogLevel, message: impl Into<LogMessage>) {
        let message = message.into();
        let message = match self.prefix.as_deref() {
            Some(prefix) => message.with_prefix(prefix),
            None => message,
        };

        let (text, mut fields) = message.into_parts();
        if let Some(scope) = &self.scope {
            scope.merge_into(&mut fields);
        }
        fields.merge_missing(&self.bindings);

        let mut record = LogRecord::new(level, text).with_fields(fields);
        if let Some(context) = &self.context {
            record = record.with_context(context.clone());
        }
        self.sink.emit(record);
    }

    /// Emit at Trace (the most verbose severity).
    pub fn trace(&self, message: impl Into<LogMessage>) {
        self.emit(LogLevel::Trace, message);
    }

    /// Alias for [`trace`](Self::trace).
    pub fn verbose(&self, message: impl Into<LogMessage>) {
        self.trace(message);
    }

    pub fn debug(&self, message: impl Into<LogMessage>) {
        self.emit(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<LogMessage>) {
        self.emit(LogLevel::Info, message);
    }

    /// Alias for [`info`](Self::info), for call sites written against a
    /// generic `log` method.
    pub fn log(&self, message: impl Into<LogMessage>) {
        self.info(message);
    }

    pub fn warn(&self, message: impl Into<LogMessage>) {
        self.emit(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<LogMessage>) {
        self.emit(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: impl Into<LogMessage>) {
        self.emit(LogLevel::Fatal, message);
    }

    /// Merge metadata into the bound request scope.
    ///
    /// When no scope is bound yet, a fresh one is bound first, so the call
    /// never fails for lack of scope. Repeated merges accumulate; later
    /// values win on key collision.
    pub fn add_metadata(&mut self, metadata: Metadata) {
        self.scope
            .get_or_insert_with(RequestScope::new)
            .assign(metadata);
    }

    /// Bind a request scope to this wrapper.
    ///
    /// Scope fields appear on every record emitted while bound. Request
    /// handling glue creates one scope per request and binds it to the
    /// wrappers serving that request.
    pub fn bind_scope(&mut self, scope: RequestScope) {
        self.scope = Some(scope);
    }

    pub fn scope(&self) -> Option<&RequestScope> {
        self.scope.as_ref()
    }

    /// Create a child wrapper over the same sink.
    ///
    /// The given bindings are merged into every record the child emits,
    /// on top of this wrapper's own bindings (child values win). The child
    /// starts with no context label and no prefix, and shares this
    /// wrapper's scope handle so request metadata stays visible.
    #[must_use]
    pub fn child(&self, bindings: Metadata) -> Self {
        let mut merged = self.bindings.clone();
        merged.merge(bindings);

        Self {
            sink: Arc::clone(&self.sink),
            context: None,
            prefix: None,
            bindings: merged,
            scope: self.scope.clone(),
        }
    }

    /// Fields merged into every record this wrapper emits.
    pub fn bindings(&self) -> &Metadata {
        &self.bindings
    }

    /// Effective minimum severity of the shared sink.
    pub fn level(&self) -> LogLevel {
        self.sink.level()
    }

    /// Change the shared sink's minimum severity.
    ///
    /// Every wrapper over the same sink observes the change; already-emitted
    /// records are unaffected.
    pub fn set_level(&self, level: LogLevel) {
        self.sink.set_level(level);
    }

    /// Numeric value of the effective minimum severity.
    pub fn level_value(&self) -> u8 {
        self.sink.level().value()
    }

    /// Flush the shared sink's appenders.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}
