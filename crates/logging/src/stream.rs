//! crates/logging/src/stream.rs
//! Handler that writes formatted records to an [`io::Write`] target.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use levels::Level;

use crate::formatter::Formatter;
use crate::handler::Handler;
use crate::line_mode::LineMode;
use crate::record::Record;

/// Handler that renders records through a [`Formatter`] into a writer.
///
/// The writer sits behind a mutex so one handler can be shared by loggers on
/// several threads; each record is rendered into a single buffer and written
/// with one `write_all` call, so concurrent records never interleave within
/// a line. Write failures are absorbed: logging never fails the caller.
///
/// # Examples
///
/// ```
/// use std::panic::Location;
/// use levels::Level;
/// use logging::{Handler, LineMode, Record, StreamHandler};
///
/// let handler = StreamHandler::new(Vec::new());
/// let record = Record::new("app", Level::SUCCESS, format_args!("done"), Location::caller());
/// handler.handle(&record);
///
/// assert_eq!(handler.into_inner(), b"SUCCESS:app:done\n".to_vec());
///
/// let bare = StreamHandler::new(Vec::new()).with_line_mode(LineMode::WithoutNewline);
/// bare.handle(&record);
/// assert_eq!(bare.into_inner(), b"SUCCESS:app:done".to_vec());
/// ```
pub struct StreamHandler<W> {
    writer: Mutex<W>,
    formatter: Formatter,
    line_mode: LineMode,
    level: Level,
}

impl<W> StreamHandler<W> {
    /// Creates a handler with the default format that accepts every level.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            formatter: Formatter::default(),
            line_mode: LineMode::default(),
            level: Level::NOTSET,
        }
    }

    /// Replaces the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replaces the [`LineMode`].
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Sets the minimum level this handler accepts.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Runs `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Consumes the handler and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StreamHandler<io::Stderr> {
    /// Handler writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamHandler<File> {
    /// Handler appending to the file at `path`, creating it when missing.
    pub fn append_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> StreamHandler<W> {
    fn write_record(&self, record: &Record) -> io::Result<()> {
        let mut line = self.formatter.format(record);
        if self.line_mode.append_newline() {
            line.push('\n');
        }
        self.with_writer(|writer| writer.write_all(line.as_bytes()))
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn level(&self) -> Level {
        self.level
    }

    fn handle(&self, record: &Record) {
        if let Err(error) = self.write_record(record) {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "logging::stream", %error, logger = %record.name, "dropping record");
            #[cfg(not(feature = "tracing"))]
            let _ = error;
        }
    }

    fn flush(&self) {
        let _ = self.with_writer(Write::flush);
    }
}

impl<W: fmt::Debug> fmt::Debug for StreamHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("line_mode", &self.line_mode)
            .field("level", &self.level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::Location;

    fn record(level: Level, message: &'static str) -> Record {
        Record::new("svc", level, format_args!("{message}"), Location::caller())
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_record() {
        let handler = StreamHandler::new(Vec::new());
        handler.handle(&record(Level::INFO, "one"));
        handler.handle(&record(Level::WARNING, "two"));

        let output = String::from_utf8(handler.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("INFO:svc:one"));
        assert_eq!(lines.next(), Some("WARNING:svc:two"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn custom_formatter_is_used() {
        let handler = StreamHandler::new(Vec::new()).with_formatter(Formatter::new("{levelno} {message}"));
        handler.handle(&record(Level::SPAM, "noisy"));
        assert_eq!(handler.into_inner(), b"5 noisy\n".to_vec());
    }

    #[test]
    fn write_errors_are_absorbed() {
        let handler = StreamHandler::new(FailingWriter);
        handler.handle(&record(Level::ERROR, "lost"));
        handler.flush();
    }

    #[test]
    fn level_builder_sets_threshold() {
        let handler = StreamHandler::new(Vec::new()).with_level(Level::NOTICE);
        assert_eq!(Handler::level(&handler), Level::NOTICE);
    }

    #[test]
    fn with_writer_exposes_buffer() {
        let handler = StreamHandler::new(Vec::new());
        handler.handle(&record(Level::INFO, "peek"));
        let len = handler.with_writer(|buffer| buffer.len());
        assert_eq!(len, "INFO:svc:peek\n".len());
    }
}
