//! Scoped message stream
//!
//! A [`LogStream`] accumulates one message privately on the calling thread
//! and commits it to its [`Logger`] exactly once, when the stream is dropped,
//! when [`LogStream::endl`] is appended, or when [`LogStream::commit`] is
//! called. No lock is held while the message is being built.

use super::logger::Logger;
use super::severity::Severity;
use std::fmt::{self, Write as _};

/// Per-call message builder bound to one logger and one severity
///
/// # Example
///
/// ```
/// use stream_logger::prelude::*;
///
/// let logger = Logger::new();
/// let memory = MemorySink::new();
/// logger.add_sink(Box::new(memory.clone()));
///
/// logger
///     .begin_with(Severity::INFO)
///     .append("Stabilizing phaser ")
///     .append(3)
///     .append(", time remaining = ")
///     .append(1250)
///     .append(" ms")
///     .endl();
///
/// assert!(memory
///     .contents()
///     .ends_with("Stabilizing phaser 3, time remaining = 1250 ms\n"));
/// ```
pub struct LogStream<'a> {
    logger: &'a Logger,
    level: Severity,
    buffer: String,
    committed: bool,
}

impl<'a> LogStream<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Severity) -> Self {
        Self {
            logger,
            level,
            buffer: String::new(),
            committed: false,
        }
    }

    /// Append the textual form of `value`.
    ///
    /// Appends are never filtered; a message whose level is rejected is
    /// discarded as a whole at commit. After commit, appends are ignored.
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        if !self.committed {
            // Writing into a String cannot fail
            let _ = write!(self.buffer, "{}", value);
        }
        self
    }

    /// Append a line terminator and commit the message.
    pub fn endl(&mut self) -> &mut Self {
        self.append('\n');
        self.finish();
        self
    }

    /// Commit the message now instead of at end of scope.
    pub fn commit(mut self) {
        self.finish();
    }

    #[inline]
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Text accumulated so far.
    #[inline]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    #[inline]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    fn finish(&mut self) {
        if self.committed {
            return;
        }
        self.committed = true;
        self.logger.dispatch(&self.buffer, self.level);
    }
}

impl fmt::Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

impl fmt::Debug for LogStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("level", &self.level)
            .field("buffer", &self.buffer)
            .field("committed", &self.committed)
            .finish()
    }
}
