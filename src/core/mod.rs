//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_stream;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;

pub use config::{LoggerConfig, SinkConfig};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_stream::LogStream;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
