//! crates/logging/src/handler.rs
//! Destinations for emitted records.

use std::sync::{Arc, Mutex, PoisonError};

use levels::Level;

use crate::record::Record;

/// A destination for records.
///
/// Loggers offer each record to every handler on themselves and their
/// ancestors; a handler only receives records at or above its own
/// [`level`](Self::level). Handlers must not fail the caller: I/O problems are
/// absorbed inside [`handle`](Self::handle).
pub trait Handler: Send + Sync {
    /// Minimum level this handler accepts.
    fn level(&self) -> Level {
        Level::NOTSET
    }

    /// Processes one record.
    fn handle(&self, record: &Record);

    /// Flushes buffered output, if any.
    fn flush(&self) {}
}

/// In-memory handler that keeps every record it receives.
///
/// Clones share the same buffer, so a test can keep one clone and attach the
/// other to a logger.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{CaptureHandler, Manager};
/// use levels::Level;
///
/// let manager = Manager::new();
/// let capture = CaptureHandler::new();
/// let logger = manager.get_logger("app");
/// logger.set_level(Level::INFO);
/// logger.add_handler(Arc::new(capture.clone()));
///
/// logger.info(format_args!("ready"));
/// let records = capture.drain();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "ready");
/// assert!(capture.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureHandler {
    records: Arc<Mutex<Vec<Record>>>,
    level: Level,
}

impl CaptureHandler {
    /// Creates a handler accepting every level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler that ignores records below `level`.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            records: Arc::default(),
            level,
        }
    }

    /// Returns a copy of the captured records.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Removes and returns all captured records.
    pub fn drain(&self) -> Vec<Record> {
        self.lock().drain(..).collect()
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Handler for CaptureHandler {
    fn level(&self) -> Level {
        self.level
    }

    fn handle(&self, record: &Record) {
        self.lock().push(record.clone());
    }
}
