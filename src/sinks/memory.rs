//! In-memory sink

use crate::core::{Result, Severity, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects entries in a shared string buffer.
///
/// Clones share the same buffer, so a caller can keep one handle while the
/// logger owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_log_entry(&self, entry: &str, _level: Severity) -> Result<()> {
        self.buffer.lock().push_str(entry);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.write_log_entry("one\n", Severity::INFO).unwrap();
        sink.write_log_entry("two\n", Severity::ERR).unwrap();

        assert_eq!(handle.contents(), "one\ntwo\n");
        assert_eq!(handle.lines(), vec!["one", "two"]);

        handle.clear();
        assert_eq!(sink.contents(), "");
    }
}
