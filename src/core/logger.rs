//! Underlying structured log sink

use super::{
    appender::Appender,
    error::Result,
    log_level::LogLevel,
    metadata::Metadata,
    metrics::LoggerMetrics,
    record::LogRecord,
};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default shutdown timeout for sink cleanup (5 seconds)
///
/// Used when the sink is dropped without an explicit `shutdown()` call.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// The underlying sink shared by all wrapper instances.
///
/// Owns the appenders, the effective minimum level, and the base fields
/// merged into every record. In buffered mode records are enqueued onto a
/// bounded channel and written by a background worker thread, so logging
/// calls return without waiting on I/O.
pub struct Logger {
    min_level: Arc<RwLock<LogLevel>>,
    appenders: Arc<RwLock<Vec<Box<dyn Appender>>>>,
    /// Fields merged into every record (lowest priority on key collision)
    base: Metadata,
    sender: Option<Sender<LogRecord>>,
    worker: Option<thread::JoinHandle<()>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a synchronous sink: records are written on the calling thread.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Arc::new(RwLock::new(LogLevel::Info)),
            appenders: Arc::new(RwLock::new(Vec::new())),
            base: Self::default_base(),
            sender: None,
            worker: None,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a buffered sink with a bounded queue of `buffer_size` records.
    ///
    /// A background worker drains the queue in batches. When the queue is
    /// full, Error and Fatal records are force-written synchronously and
    /// lower severities are dropped with a rate-limited stderr alert.
    #[must_use]
    pub fn with_buffer(buffer_size: usize) -> Self {
        let (sender, receiver) = bounded(buffer_size);
        let appenders: Arc<RwLock<Vec<Box<dyn Appender>>>> = Arc::new(RwLock::new(Vec::new()));
        let appenders_clone = Arc::clone(&appenders);
        let metrics = Arc::new(LoggerMetrics::new());
        let metrics_clone = Arc::clone(&metrics);

        let worker = thread::spawn(move || {
            const BATCH_SIZE: usize = 50;
            let mut batch = Vec::with_capacity(BATCH_SIZE);

            loop {
                match receiver.recv() {
                    Ok(record) => batch.push(record),
                    Err(_) => {
                        // Channel closed; flush the remainder and exit
                        if !batch.is_empty() {
                            Self::process_batch(&appenders_clone, &batch, &metrics_clone);
                        }
                        break;
                    }
                }

                while batch.len() < BATCH_SIZE {
                    match receiver.try_recv() {
                        Ok(record) => batch.push(record),
                        Err(_) => break,
                    }
                }

                Self::process_batch(&appenders_clone, &batch, &metrics_clone);
                batch.clear();
            }
        });

        Self {
            min_level: Arc::new(RwLock::new(LogLevel::Info)),
            appenders,
            base: Self::default_base(),
            sender: Some(sender),
            worker: Some(worker),
            metrics,
        }
    }

    /// Base fields carried by a sink that was not configured otherwise.
    fn default_base() -> Metadata {
        Metadata::new().with("pid", std::process::id() as i64)
    }

    fn process_batch(
        appenders: &Arc<RwLock<Vec<Box<dyn Appender>>>>,
        batch: &[LogRecord],
        metrics: &Arc<LoggerMetrics>,
    ) {
        let mut appenders_guard = appenders.write();

        for record in batch {
            Self::process_one(&mut appenders_guard, record, metrics);
        }

        // Flush after each batch so buffered writers stay current
        for (idx, appender) in appenders_guard.iter_mut().enumerate() {
            if let Err(e) = appender.flush() {
                eprintln!("[LOGGER ERROR] Appender #{} flush failed: {}", idx, e);
            }
        }
    }

    /// Write one record to every appender; a failing appender never stops
    /// the others from receiving the record.
    fn process_one(
        appenders: &mut Vec<Box<dyn Appender>>,
        record: &LogRecord,
        metrics: &Arc<LoggerMetrics>,
    ) {
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            if let Err(e) = appender.append(record) {
                eprintln!("[LOGGER ERROR] Appender #{} failed: {}", idx, e);
                has_error = true;
            }
        }

        if has_error {
            metrics.record_dropped();
        } else {
            metrics.record_logged();
        }
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    /// Replace the base fields merged into every record.
    pub fn set_base(&mut self, base: Metadata) {
        self.base = base;
    }

    pub fn base(&self) -> &Metadata {
        &self.base
    }

    /// Effective minimum severity for future records.
    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Change the effective minimum severity for future records.
    ///
    /// The level is shared: wrappers holding this sink observe the change
    /// immediately.
    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Emit a fully-formed record, applying the level threshold and merging
    /// base fields (record fields win on key collision).
    pub fn emit(&self, mut record: LogRecord) {
        if record.level < *self.min_level.read() {
            return;
        }

        record.fields.merge_missing(&self.base);
        self.send(record);
    }

    /// Emit a bare text record with no context or fields.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(LogRecord::new(level, message.into()));
    }

    fn send(&self, record: LogRecord) {
        if let Some(ref sender) = self.sender {
            match sender.try_send(record) {
                Ok(()) => {}
                Err(TrySendError::Full(record)) => self.handle_overflow(record),
                Err(TrySendError::Disconnected(_)) => {
                    // Sink is shutting down; nothing left to do
                }
            }
        } else {
            let mut appenders = self.appenders.write();
            Self::process_one(&mut appenders, &record, &self.metrics);
        }
    }

    /// Queue overflow: critical records are written synchronously, the rest
    /// are dropped with a rate-limited alert.
    fn handle_overflow(&self, record: LogRecord) {
        self.metrics.record_queue_full();

        if record.level.is_critical() {
            let mut appenders = self.appenders.write();
            Self::process_one(&mut appenders, &record, &self.metrics);
            return;
        }

        let dropped_before = self.metrics.record_dropped();
        if dropped_before == 0 || (dropped_before + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER WARNING] Queue full, {} logs dropped. \
                 Consider increasing the buffer size.",
                dropped_before + 1
            );
        }
    }

    /// Number of records dropped due to overflow or appender failure.
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    /// Gracefully shut down the sink, draining buffered records.
    ///
    /// Returns `true` if the worker drained within `timeout`. Dropping the
    /// sink without calling this uses [`DEFAULT_SHUTDOWN_TIMEOUT`].
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        if let Some(handle) = self.worker.take() {
            let start = std::time::Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Worker thread panicked during shutdown: {:?}", e);
                        return false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] Worker thread did not finish within timeout. \
                         Some logs may be lost."
                    );
                    return false;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }

        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
            return false;
        }

        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Sink shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing a sink with a fluent API
///
/// # Example
/// ```
/// use bff_logging::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .buffered(1000)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    base: Option<Metadata>,
    appenders: Vec<Box<dyn Appender>>,
    buffer: Option<usize>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            base: None,
            appenders: Vec::new(),
            buffer: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Replace the base fields merged into every record
    #[must_use = "builder methods return a new value"]
    pub fn base(mut self, base: Metadata) -> Self {
        self.base = Some(base);
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Enable buffered mode with the given queue size.
    ///
    /// If not called, the sink writes synchronously.
    #[must_use = "builder methods return a new value"]
    pub fn buffered(mut self, buffer_size: usize) -> Self {
        self.buffer = Some(buffer_size);
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = if let Some(size) = self.buffer {
            Logger::with_buffer(size)
        } else {
            Logger::new()
        };

        logger.set_level(self.min_level);
        if let Some(base) = self.base {
            logger.set_base(base);
        }
        for appender in self.appenders {
            logger.add_appender(appender);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for the sink
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
