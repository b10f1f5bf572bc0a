//! src/logger.rs
//! The extended logger and its class tag.

use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use levels::Level;
use logging::{ClassMismatch, Logger, LoggerClass, Manager};

/// Class stamped on loggers created for [`VerboseLogger`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VerboseClass;

impl LoggerClass for VerboseClass {
    fn class_name(&self) -> &'static str {
        "VerboseLogger"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A logger with one method per custom level.
///
/// `VerboseLogger` wraps a shared [`Logger`] and dereferences to it, so the
/// standard methods (`debug`, `info`, `set_level`, `add_handler`, ...) are all
/// available. The added methods behave exactly like the standard ones: the
/// level is checked first and the arguments are only formatted when it is
/// enabled.
///
/// # Examples
///
/// ```
/// use logging::{CaptureHandler, Manager};
/// use std::sync::Arc;
/// use verboselogs::{Level, VerboseLogger};
///
/// let manager = Manager::with_last_resort(None);
/// let capture = Arc::new(CaptureHandler::new());
/// manager.root().add_handler(capture.clone());
///
/// let logger = VerboseLogger::new_in(&manager, "app");
/// logger.set_level(Level::VERBOSE);
/// logger.verbose(format_args!("scanning {} files", 3));
/// logger.spam(format_args!("not shown"));
///
/// let records = capture.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level_name, "VERBOSE");
/// ```
#[derive(Clone)]
pub struct VerboseLogger {
    inner: Arc<Logger>,
}

impl VerboseLogger {
    /// Creates a logger outside the global factory, parented to the root.
    ///
    /// Directly constructed loggers are not part of the name-based hierarchy,
    /// so the parent is set explicitly. Use [`crate::get_logger`] after
    /// [`crate::install`] to obtain factory-managed verbose loggers instead.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::new_in(logging::manager(), name)
    }

    /// Like [`new`](Self::new), against an explicit manager.
    #[must_use]
    pub fn new_in(manager: &Manager, name: &str) -> Self {
        let inner = manager.detached(name, Arc::new(VerboseClass));
        inner.set_parent(Some(manager.root()));
        Self { inner }
    }

    /// The wrapped logger.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger> {
        &self.inner
    }

    /// Unwraps into the shared logger.
    #[must_use]
    pub fn into_inner(self) -> Arc<Logger> {
        self.inner
    }

    /// Logs at [`Level::SPAM`].
    #[track_caller]
    pub fn spam(&self, args: fmt::Arguments<'_>) {
        self.inner.log(Level::SPAM, args);
    }

    /// Logs at [`Level::VERBOSE`].
    #[track_caller]
    pub fn verbose(&self, args: fmt::Arguments<'_>) {
        self.inner.log(Level::VERBOSE, args);
    }

    /// Logs at [`Level::NOTICE`].
    #[track_caller]
    pub fn notice(&self, args: fmt::Arguments<'_>) {
        self.inner.log(Level::NOTICE, args);
    }

    /// Logs at [`Level::SUCCESS`].
    #[track_caller]
    pub fn success(&self, args: fmt::Arguments<'_>) {
        self.inner.log(Level::SUCCESS, args);
    }
}

impl Deref for VerboseLogger {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.inner
    }
}

impl TryFrom<Arc<Logger>> for VerboseLogger {
    type Error = ClassMismatch;

    /// Succeeds for loggers that were created with [`VerboseClass`].
    fn try_from(inner: Arc<Logger>) -> Result<Self, Self::Error> {
        if inner.is_class::<VerboseClass>() {
            Ok(Self { inner })
        } else {
            Err(ClassMismatch {
                name: inner.name().to_owned(),
                expected: VerboseClass.class_name(),
                found: inner.class().class_name(),
            })
        }
    }
}

impl From<VerboseLogger> for Arc<Logger> {
    fn from(logger: VerboseLogger) -> Self {
        logger.inner
    }
}

impl fmt::Debug for VerboseLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VerboseLogger").field(&self.inner).finish()
    }
}
