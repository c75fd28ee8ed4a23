//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes the filter, default level, prefix toggle and
//! sink list of a logger, and can be read from JSON.
//!
//! ```
//! use stream_logger::{LoggerConfig, Severity};
//!
//! let config = LoggerConfig::from_json_str(
//!     r#"{ "filter": "INFO|WARN|ERR", "sinks": [ { "type": "console" } ] }"#,
//! )
//! .unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.filter(), Severity::INFO | Severity::WARN | Severity::ERR);
//! assert_eq!(logger.sink_count(), 1);
//! ```

use super::{
    error::Result,
    logger::{Logger, LoggerBuilder},
    severity::Severity,
};
use crate::sinks::{ConsoleSink, FileSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub filter: Severity,
    pub level: Severity,
    pub add_prefix: bool,
    pub sinks: Vec<SinkConfig>,
}

/// One sink entry, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SinkConfig {
    Console {
        #[serde(default)]
        colors: bool,
    },
    File {
        path: PathBuf,
    },
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filter: Severity::INFO,
            level: Severity::INFO,
            add_prefix: true,
            sinks: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a logger and open every configured sink, in order.
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::SinkOpenFailure`](super::LoggerError::SinkOpenFailure)
    /// if a file sink cannot be opened; no logger is returned in that case.
    pub fn build(&self) -> Result<Logger> {
        let mut builder = LoggerBuilder::new()
            .filter(self.filter)
            .level(self.level)
            .add_prefix(self.add_prefix);

        for sink in &self.sinks {
            builder = match sink {
                SinkConfig::Console { colors } => builder.sink(Self::console_sink(*colors)),
                SinkConfig::File { path } => builder.sink(FileSink::new(path.clone())?),
            };
        }

        Ok(builder.build())
    }

    #[cfg(feature = "console")]
    fn console_sink(colors: bool) -> ConsoleSink {
        ConsoleSink::new().with_colors(colors)
    }

    #[cfg(not(feature = "console"))]
    fn console_sink(colors: bool) -> ConsoleSink {
        if colors {
            eprintln!("[LOGGER WARNING] Console colors requested but the `console` feature is disabled");
        }
        ConsoleSink::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert!(config.add_prefix);
    }

    #[test]
    fn test_full_config() {
        let config = LoggerConfig::from_json_str(
            r#"{
                "filter": "ALL",
                "level": 8,
                "add_prefix": false,
                "sinks": [
                    { "type": "console", "colors": true },
                    { "type": "file", "path": "/tmp/app.log" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.filter, Severity::ALL);
        assert_eq!(config.level, Severity::FREQ);
        assert!(!config.add_prefix);
        assert_eq!(
            config.sinks,
            vec![
                SinkConfig::Console { colors: true },
                SinkConfig::File {
                    path: PathBuf::from("/tmp/app.log")
                },
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_sink_and_severity() {
        let err = LoggerConfig::from_json_str(r#"{ "sinks": [ { "type": "network" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));

        assert!(LoggerConfig::from_json_str(r#"{ "filter": "DEBUG" }"#).is_err());
    }

    #[test]
    fn test_build_opens_file_sinks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configured.log");
        let config = LoggerConfig {
            filter: Severity::WARN,
            add_prefix: false,
            sinks: vec![SinkConfig::File { path: path.clone() }],
            ..LoggerConfig::default()
        };

        let logger = config.build().unwrap();
        logger.warn("configured\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "configured\n");
    }

    #[test]
    fn test_build_reports_bad_path() {
        let dir = TempDir::new().unwrap();
        let config = LoggerConfig {
            sinks: vec![SinkConfig::File {
                path: dir.path().join("missing").join("app.log"),
            }],
            ..LoggerConfig::default()
        };

        assert!(matches!(
            config.build(),
            Err(LoggerError::SinkOpenFailure { .. })
        ));
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let config = LoggerConfig {
            filter: Severity::ERR | Severity::WARN,
            ..LoggerConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["filter"], "WARN|ERR");
        assert_eq!(json["level"], "INFO");
    }
}
