//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats its arguments into a [`LogStream`](crate::LogStream),
//! terminates the line and commits it, similar to `println!`.
//!
//! # Examples
//!
//! ```
//! use stream_logger::prelude::*;
//! use stream_logger::info;
//!
//! let logger = Logger::new();
//! let memory = MemorySink::new();
//! logger.add_sink(Box::new(memory.clone()));
//!
//! let level = 3;
//! info!(logger, "Phaser {} stabilized.", level);
//! assert!(memory.contents().ends_with("Phaser 3 stabilized.\n"));
//! ```

/// Log one line at an explicit severity.
///
/// # Examples
///
/// ```
/// # use stream_logger::prelude::*;
/// # let logger = Logger::new();
/// use stream_logger::log;
/// log!(logger, Severity::WARN, "WARNING: Phasers damaged");
/// log!(logger, Severity::ERR | Severity::WARN, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        $logger
            .begin_with($level)
            .append(::std::format_args!($($arg)+))
            .endl();
    }};
}

/// Log an info-level line.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::INFO, $($arg)+)
    };
}

/// Log a warning-level line.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::WARN, $($arg)+)
    };
}

/// Log an error-level line.
///
/// # Examples
///
/// ```
/// # use stream_logger::prelude::*;
/// # let logger = Logger::new();
/// use stream_logger::error;
/// error!(logger, "ERROR: Failed to boot phasers");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::ERR, $($arg)+)
    };
}

/// Log a line in the high-frequency category.
#[macro_export]
macro_rules! freq {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::FREQ, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};
    use crate::sinks::MemorySink;

    fn logger_with_memory(filter: Severity) -> (Logger, MemorySink) {
        let logger = Logger::builder().filter(filter).add_prefix(false).build();
        let memory = MemorySink::new();
        logger.add_sink(Box::new(memory.clone()));
        (logger, memory)
    }

    #[test]
    fn test_log_macro() {
        let (logger, memory) = logger_with_memory(Severity::ALL);
        log!(logger, Severity::INFO, "Test message");
        log!(logger, Severity::WARN, "Formatted: {}", 42);
        assert_eq!(memory.contents(), "Test message\nFormatted: 42\n");
    }

    #[test]
    fn test_level_macros() {
        let (logger, memory) = logger_with_memory(Severity::ALL);
        info!(logger, "info {}", 1);
        warn!(logger, "warn {}", 2);
        error!(logger, "error {}", 3);
        freq!(logger, "freq {}", 4);
        assert_eq!(memory.lines(), vec!["info 1", "warn 2", "error 3", "freq 4"]);
    }

    #[test]
    fn test_macros_respect_filter() {
        let (logger, memory) = logger_with_memory(Severity::INFO);
        freq!(logger, "Phaser {} ready, stabilizing immediately", 10);
        info!(logger, "All phasers stabilized");
        assert_eq!(memory.contents(), "All phasers stabilized\n");
    }

    #[test]
    fn test_macro_through_arc() {
        let (logger, memory) = logger_with_memory(Severity::ALL);
        let shared = std::sync::Arc::new(logger);
        info!(shared, "shared");
        assert_eq!(memory.contents(), "shared\n");
    }
}
