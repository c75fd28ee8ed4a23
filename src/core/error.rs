//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An empty sink handle was offered for registration
    #[error("Invalid sink: cannot register an empty sink handle")]
    InvalidSink,

    /// A sink could not open its destination
    #[error("Failed to open sink destination '{path}': {source}")]
    SinkOpenFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A sink failed to record an entry
    #[error("Sink '{sink}' failed to write entry: {message}")]
    SinkWriteFailure { sink: String, message: String },

    /// A sink failed to flush
    #[error("Sink '{sink}' failed to flush: {message}")]
    SinkFlushFailure { sink: String, message: String },

    /// Unparseable or out-of-range severity
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a sink open failure for `path`
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpenFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a sink write failure
    pub fn sink_write(sink: impl Into<String>, message: impl ToString) -> Self {
        LoggerError::SinkWriteFailure {
            sink: sink.into(),
            message: message.to_string(),
        }
    }

    /// Create a sink flush failure
    pub fn sink_flush(sink: impl Into<String>, message: impl ToString) -> Self {
        LoggerError::SinkFlushFailure {
            sink: sink.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_severity(message: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity(message.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
