//! # Stream Logger
//!
//! A small in-process logging facility with bitmask severity filtering and
//! pluggable output sinks.
//!
//! ## Features
//!
//! - **Bitmask Filtering**: `INFO`, `WARN`, `ERR` and `FREQ` are independent
//!   categories that can be enabled in any combination
//! - **Scoped Message Streams**: each call site builds its message privately
//!   and commits it once, so concurrent callers never share a buffer
//! - **Multiple Sinks**: console, file, in-memory and custom sinks, with
//!   per-sink failure isolation
//! - **Thread Safe**: share one `Arc<Logger>` across worker threads
//!
//! ## Example
//!
//! ```
//! use stream_logger::prelude::*;
//!
//! let logger = Logger::new();
//! logger.add_sink(Box::new(ConsoleSink::new()));
//! logger.set_filter(Severity::INFO | Severity::ERR);
//!
//! logger.begin_with(Severity::INFO).append("All systems initialized").endl();
//! logger.begin_with(Severity::WARN).append("not shown").endl();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogEntry, LogStream, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, Severity, Sink, SinkConfig,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use core::{
    LogEntry, LogStream, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    Severity, Sink, SinkConfig,
};
pub use sinks::{ConsoleSink, FileSink, MemorySink};
