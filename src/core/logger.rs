//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_stream::LogStream,
    metrics::LoggerMetrics,
    severity::Severity,
    sink::Sink,
};
use crate::sinks::FileSink;
use parking_lot::RwLock;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

/// Sink failures are reported on the first occurrence and then once per this many.
const FAILURE_ALERT_INTERVAL: u64 = 1000;

/// The logging core: filter state plus the ordered list of sinks.
///
/// A logger holds no message buffer. Messages are built in per-call
/// [`LogStream`]s and only the final dispatch touches shared state, so a
/// logger is shared between threads as `Arc<Logger>`.
///
/// # Example
///
/// ```
/// use stream_logger::prelude::*;
///
/// let logger = Logger::new();
/// let memory = MemorySink::new();
/// logger.add_sink(Box::new(memory.clone()));
/// logger.set_filter(Severity::ERR | Severity::WARN);
///
/// logger.begin_with(Severity::INFO).append("Testing\n");
/// assert_eq!(memory.contents(), "");
///
/// logger.begin_with(Severity::ERR).append("Error msg!\n");
/// assert!(memory.contents().ends_with("Error msg!\n"));
/// ```
pub struct Logger {
    filter: RwLock<Severity>,
    level: RwLock<Severity>,
    add_prefix: RwLock<bool>,
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: RwLock::new(Severity::INFO),
            level: RwLock::new(Severity::INFO),
            add_prefix: RwLock::new(true),
            sinks: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn filter(&self) -> Severity {
        *self.filter.read()
    }

    /// Replace the filter mask. Applies to every message committed afterwards,
    /// including streams that were opened before the change.
    pub fn set_filter(&self, filter: Severity) {
        *self.filter.write() = filter;
    }

    /// The level used by [`Logger::begin`] when a call site does not pick one.
    pub fn level(&self) -> Severity {
        *self.level.read()
    }

    pub fn set_level(&self, level: Severity) {
        *self.level.write() = level;
    }

    pub fn add_prefix(&self) -> bool {
        *self.add_prefix.read()
    }

    /// Toggle the `[HH:MM:SS] [<thread-id>] ` prefix on delivered entries.
    pub fn set_add_prefix(&self, add_prefix: bool) {
        *self.add_prefix.write() = add_prefix;
    }

    /// Whether a message at `level` would currently be delivered.
    ///
    /// Useful to skip expensive formatting; the authoritative check still
    /// happens when the stream commits.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        Severity::passes(self.filter(), level)
    }

    /// Take ownership of a sink and append it to the dispatch order.
    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Register a sink handle that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidSink`] for `None`; the sink list is left
    /// unchanged.
    pub fn try_add_sink(&self, sink: Option<Box<dyn Sink>>) -> Result<()> {
        let sink = sink.ok_or(LoggerError::InvalidSink)?;
        self.add_sink(sink);
        Ok(())
    }

    /// Open a [`FileSink`] at `path` and register it.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpenFailure`] if the file cannot be opened
    /// for appending.
    pub fn add_file_sink(&self, path: impl Into<PathBuf>) -> Result<()> {
        let sink = FileSink::new(path)?;
        self.add_sink(Box::new(sink));
        Ok(())
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Start a message at the default level.
    pub fn begin(&self) -> LogStream<'_> {
        LogStream::new(self, self.level())
    }

    /// Start a message at `level`. The filter is not consulted until commit.
    pub fn begin_with(&self, level: Severity) -> LogStream<'_> {
        LogStream::new(self, level)
    }

    /// Log a complete message in one call.
    pub fn log(&self, level: Severity, message: impl std::fmt::Display) {
        let mut stream = self.begin_with(level);
        stream.append(message);
        stream.commit();
    }

    #[inline]
    pub fn info(&self, message: impl std::fmt::Display) {
        self.log(Severity::INFO, message);
    }

    #[inline]
    pub fn warn(&self, message: impl std::fmt::Display) {
        self.log(Severity::WARN, message);
    }

    #[inline]
    pub fn error(&self, message: impl std::fmt::Display) {
        self.log(Severity::ERR, message);
    }

    #[inline]
    pub fn freq(&self, message: impl std::fmt::Display) {
        self.log(Severity::FREQ, message);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Filter, format and fan out one committed message.
    ///
    /// Only reached from [`LogStream`]'s commit, exactly once per stream.
    pub(crate) fn dispatch(&self, text: &str, level: Severity) {
        self.metrics.record_committed();

        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::compose(level, text, self.add_prefix());
        let sinks = self.sinks.read();
        Self::fan_out(&sinks, &entry, &self.metrics);
    }

    /// Write an entry to every sink in registration order
    ///
    /// **Per-Sink Failure Isolation**: each write is wrapped in catch_unwind,
    /// and errors are reported and counted without stopping the loop. One
    /// broken sink never keeps an entry from the others or reaches the caller.
    fn fan_out(sinks: &[Box<dyn Sink>], entry: &LogEntry, metrics: &LoggerMetrics) {
        for (idx, sink) in sinks.iter().enumerate() {
            let write_result = panic::catch_unwind(AssertUnwindSafe(|| {
                sink.write_log_entry(entry.text(), entry.level())
            }));

            match write_result {
                Ok(Ok(())) => {
                    metrics.record_delivered();
                }
                Ok(Err(e)) => {
                    if Self::should_alert(metrics.record_sink_failure()) {
                        eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                    }
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    if Self::should_alert(metrics.record_sink_failure()) {
                        eprintln!(
                            "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                             Other sinks continue to function.",
                            idx,
                            sink.name(),
                            panic_msg
                        );
                    }
                }
            }
        }
    }

    fn should_alert(previous_failures: u64) -> bool {
        previous_failures == 0 || (previous_failures + 1) % FAILURE_ALERT_INTERVAL == 0
    }

    /// Ask every sink to flush, in registration order.
    ///
    /// All sinks are flushed even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure encountered.
    pub fn flush(&self) -> Result<()> {
        let sinks = self.sinks.read();
        let mut first_error = None;

        for (idx, sink) in sinks.iter().enumerate() {
            if let Err(e) = sink.flush() {
                eprintln!("[LOGGER ERROR] Sink #{} ({}) flush failed: {}", idx, sink.name(), e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Sinks are released after this; make their content visible first
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failures = self.metrics.sink_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed sink writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use stream_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .filter(Severity::INFO | Severity::WARN | Severity::ERR)
///     .level(Severity::WARN)
///     .sink(ConsoleSink::new())
///     .build();
///
/// assert_eq!(logger.sink_count(), 1);
/// ```
pub struct LoggerBuilder {
    filter: Severity,
    level: Severity,
    add_prefix: bool,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            filter: Severity::INFO,
            level: Severity::INFO,
            add_prefix: true,
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: Severity) -> Self {
        self.filter = filter;
        self
    }

    /// Set the default level for streams opened with [`Logger::begin`]
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn add_prefix(mut self, add_prefix: bool) -> Self {
        self.add_prefix = add_prefix;
        self
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new();
        logger.set_filter(self.filter);
        logger.set_level(self.level);
        logger.set_add_prefix(self.add_prefix);
        for sink in self.sinks {
            logger.add_sink(sink);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
