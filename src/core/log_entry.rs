//! Log entry structure and prefix generation

use super::severity::Severity;
use chrono::{DateTime, Local};
use std::cell::RefCell;

// Thread-local cache for the thread identifier token
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Render the entry prefix `"[HH:MM:SS] [<thread-id>] "` for a given time and thread.
pub fn format_prefix(time: &DateTime<Local>, thread_id: &str) -> String {
    format!("[{}] [{}] ", time.format("%H:%M:%S"), thread_id)
}

/// Prefix for the calling thread at the current local wall-clock time.
pub fn entry_prefix() -> String {
    format_prefix(&Local::now(), &get_thread_id())
}

/// A fully formatted entry, produced once per committed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    level: Severity,
    text: String,
}

impl LogEntry {
    /// Compose `prefix + payload`. The payload is kept byte-for-byte,
    /// including any trailing newline the caller appended.
    pub fn compose(level: Severity, payload: &str, with_prefix: bool) -> Self {
        let text = if with_prefix {
            let mut text = entry_prefix();
            text.push_str(payload);
            text
        } else {
            payload.to_owned()
        };

        Self { level, text }
    }

    #[inline]
    pub fn level(&self) -> Severity {
        self.level
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}
