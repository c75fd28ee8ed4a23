//! Console sink implementation

use crate::core::{LoggerError, Result, Severity, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::io::{self, Write};

struct ConsoleStreams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

/// Writes entries to an output stream, routing `ERR` entries to a separate
/// error stream.
///
/// By default the streams are the process stdout and stderr; tests and
/// embedders can inject their own with [`ConsoleSink::with_streams`].
pub struct ConsoleSink {
    streams: Mutex<ConsoleStreams>,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_streams(io::stdout(), io::stderr())
    }

    /// Use `out` for regular entries and `err` for entries carrying `ERR`.
    pub fn with_streams<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            streams: Mutex::new(ConsoleStreams {
                out: Box::new(out),
                err: Box::new(err),
            }),
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Tint each entry by its level.
    ///
    /// # Example
    ///
    /// ```
    /// use stream_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_colors(true);
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn render<'e>(&self, entry: &'e str, level: Severity) -> Cow<'e, str> {
        match level.color_code() {
            Some(color) if self.use_colors => {
                // Keep the terminator outside the escape codes
                let (body, tail) = match entry.strip_suffix('\n') {
                    Some(body) => (body, "\n"),
                    None => (entry, ""),
                };
                format!("{}{}", body.color(color), tail).into()
            }
            _ => entry.into(),
        }
    }

    #[cfg(not(feature = "console"))]
    fn render<'e>(&self, entry: &'e str, _level: Severity) -> Cow<'e, str> {
        entry.into()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_log_entry(&self, entry: &str, level: Severity) -> Result<()> {
        let output = self.render(entry, level);

        // Choosing the stream, writing and flushing happen under one lock
        let mut streams = self.streams.lock();
        let stream = if level.contains(Severity::ERR) {
            &mut streams.err
        } else {
            &mut streams.out
        };

        stream
            .write_all(output.as_bytes())
            .and_then(|()| stream.flush())
            .map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn flush(&self) -> Result<()> {
        // Flush both streams since we write to both
        let mut streams = self.streams.lock();
        streams
            .out
            .flush()
            .and_then(|()| streams.err.flush())
            .map_err(|e| LoggerError::sink_flush(self.name(), e))
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_routes_err_to_error_stream() {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let sink = ConsoleSink::with_streams(out.clone(), err.clone());

        sink.write_log_entry("all systems initialized\n", Severity::INFO).unwrap();
        sink.write_log_entry("phasers damaged\n", Severity::WARN).unwrap();
        sink.write_log_entry("failed to boot phasers\n", Severity::ERR).unwrap();
        sink.write_log_entry("phaser 3 stabilized\n", Severity::FREQ).unwrap();

        assert_eq!(
            out.text(),
            "all systems initialized\nphasers damaged\nphaser 3 stabilized\n"
        );
        assert_eq!(err.text(), "failed to boot phasers\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let sink = ConsoleSink::with_streams(BrokenPipe, SharedBuffer::default());

        let err = sink.write_log_entry("lost\n", Severity::INFO).unwrap_err();
        assert!(matches!(err, LoggerError::SinkWriteFailure { .. }));

        assert!(sink.write_log_entry("kept\n", Severity::ERR).is_ok());
        assert!(sink.flush().is_err());
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colors_keep_terminator_outside() {
        colored::control::set_override(true);
        let out = SharedBuffer::default();
        let sink = ConsoleSink::with_streams(out.clone(), SharedBuffer::default()).with_colors(true);

        sink.write_log_entry("tinted\n", Severity::INFO).unwrap();
        let text = out.text();
        assert!(text.starts_with("\u{1b}["));
        assert!(text.contains("tinted"));
        assert!(text.ends_with("\u{1b}[0m\n"));
    }

    #[test]
    fn test_name() {
        assert_eq!(ConsoleSink::new().name(), "console");
    }
}
