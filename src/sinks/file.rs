//! File sink implementation

use crate::core::{LoggerError, Result, Severity, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends entries to a file, write-through.
///
/// The file is opened once, in append mode, and owned by the sink until it is
/// dropped. Every entry is written and flushed under the sink's lock, so
/// concurrent writers never interleave within a line and no entry is left
/// buffered once `write_log_entry` returns.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open (or create) `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpenFailure`] if the file cannot be opened.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_log_entry(&self, entry: &str, _level: Severity) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(entry.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::sink_flush(self.name(), e))
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file before it closes
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("created.log");

        let sink = FileSink::new(&path).unwrap();
        assert!(path.exists());
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_write_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("through.log");
        let sink = FileSink::new(&path).unwrap();

        sink.write_log_entry("Info message\n", Severity::INFO).unwrap();

        // Visible without flush or drop
        assert_eq!(fs::read_to_string(&path).unwrap(), "Info message\n");
    }

    #[test]
    fn test_appends_to_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.log");
        fs::write(&path, "previous run\n").unwrap();

        let sink = FileSink::new(&path).unwrap();
        sink.write_log_entry("this run\n", Severity::WARN).unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\nthis run\n");
    }

    #[test]
    fn test_open_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("app.log");

        match FileSink::new(&path) {
            Err(LoggerError::SinkOpenFailure { path: reported, .. }) => {
                assert!(reported.contains("no-such-dir"));
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opening under a missing directory should fail"),
        }
    }
}
