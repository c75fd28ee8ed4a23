//! Sink trait for log output destinations

use super::{error::Result, severity::Severity};

/// A destination for formatted log entries.
///
/// The logger hands every accepted entry to each registered sink in
/// registration order. Sinks are shared by concurrent dispatchers, so
/// implementations serialize their own writes: one entry must land as a
/// whole, never interleaved with another.
///
/// Ordinary I/O problems are reported through the returned `Result`; the
/// logger records them and moves on to the next sink.
pub trait Sink: Send + Sync {
    /// Record one complete entry. `entry` already carries its prefix.
    fn write_log_entry(&self, entry: &str, level: Severity) -> Result<()>;

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str {
        "sink"
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_log_entry(&self, entry: &str, level: Severity) -> Result<()> {
        (**self).write_log_entry(entry, level)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
