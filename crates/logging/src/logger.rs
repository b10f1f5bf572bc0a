//! crates/logging/src/logger.rs
//! Named loggers, their class tag, and the level-gated emission path.

use std::any::Any;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use levels::Level;

use crate::handler::Handler;
use crate::record::Record;

/// Identifies what kind of logger a [`Manager`](crate::Manager) creates.
///
/// The manager stores one class in its default-logger-class slot and stamps
/// it onto every logger it creates. Wrapper types use the stamp to decide
/// whether a logger obtained from the factory "is" one of theirs; see
/// [`Logger::is_class`].
pub trait LoggerClass: Any + Send + Sync {
    /// Human-readable class name used in diagnostics.
    fn class_name(&self) -> &'static str;

    /// Upcast used for class identity checks.
    fn as_any(&self) -> &dyn Any;
}

/// The class of plain loggers.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardClass;

impl LoggerClass for StandardClass {
    fn class_name(&self) -> &'static str {
        "Logger"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The emission primitive: turns an admitted call into handled output.
///
/// [`Logger`] calls it only after the level check has passed, so
/// implementations are free to format `args`. Replacing the emitter with
/// [`Logger::set_emitter`] lets tests observe exactly what a logger tried
/// to emit.
pub trait Emit: Send + Sync {
    /// Emits one admitted call.
    fn emit(
        &self,
        logger: &Logger,
        level: Level,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    );
}

/// Default emitter: builds a [`Record`] and passes it to [`Logger::handle`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Dispatch;

impl Emit for Dispatch {
    fn emit(
        &self,
        logger: &Logger,
        level: Level,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    ) {
        let record = Record::new(logger.name(), level, args, location);
        logger.handle(&record);
    }
}

/// State shared between a manager and every logger it knows about.
pub(crate) struct Shared {
    pub(crate) disable: AtomicI32,
    pub(crate) last_resort: RwLock<Option<Arc<dyn Handler>>>,
}

impl Shared {
    pub(crate) fn new(last_resort: Option<Arc<dyn Handler>>) -> Self {
        Self {
            disable: AtomicI32::new(Level::NOTSET.rank()),
            last_resort: RwLock::new(last_resort),
        }
    }

    fn last_resort(&self) -> Option<Arc<dyn Handler>> {
        self.last_resort
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A named logger.
///
/// Loggers are created by a [`Manager`](crate::Manager) and shared as
/// `Arc<Logger>`. All mutable state uses interior mutability, so levels,
/// handlers and parents can be changed through a shared reference.
pub struct Logger {
    name: String,
    class: Arc<dyn LoggerClass>,
    level: AtomicI32,
    propagate: AtomicBool,
    disabled: AtomicBool,
    parent: RwLock<Option<Arc<Logger>>>,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
    emitter: RwLock<Arc<dyn Emit>>,
    shared: Arc<Shared>,
}

impl Logger {
    pub(crate) fn new(name: &str, class: Arc<dyn LoggerClass>, shared: Arc<Shared>) -> Self {
        Self {
            name: name.to_owned(),
            class,
            level: AtomicI32::new(Level::NOTSET.rank()),
            propagate: AtomicBool::new(true),
            disabled: AtomicBool::new(false),
            parent: RwLock::new(None),
            handlers: RwLock::new(Vec::new()),
            emitter: RwLock::new(Arc::new(Dispatch)),
            shared,
        }
    }

    /// Dotted name of this logger.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class this logger was created with.
    #[must_use]
    pub fn class(&self) -> &Arc<dyn LoggerClass> {
        &self.class
    }

    /// Returns `true` when this logger was created with class `C`.
    #[must_use]
    pub fn is_class<C: LoggerClass>(&self) -> bool {
        self.class.as_any().is::<C>()
    }

    /// The level set directly on this logger (`NOTSET` by default).
    #[must_use]
    pub fn level(&self) -> Level {
        Level::new(self.level.load(Ordering::Relaxed))
    }

    /// Sets this logger's own threshold.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    /// The first non-`NOTSET` level found walking up from this logger.
    #[must_use]
    pub fn effective_level(&self) -> Level {
        let own = self.level();
        if !own.is_notset() {
            return own;
        }
        let mut next = self.parent();
        while let Some(logger) = next {
            let level = logger.level();
            if !level.is_notset() {
                return level;
            }
            next = logger.parent();
        }
        Level::NOTSET
    }

    /// Reports whether a call at `level` would be emitted.
    ///
    /// This is the check every convenience method performs before touching
    /// its message arguments.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        if self.disabled() || self.shared.disable.load(Ordering::Relaxed) >= level.rank() {
            return false;
        }
        level >= self.effective_level()
    }

    /// Parent in the hierarchy, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Arc<Self>> {
        self.parent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the parent.
    pub fn set_parent(&self, parent: Option<Arc<Self>>) {
        *self.parent.write().unwrap_or_else(PoisonError::into_inner) = parent;
    }

    /// Whether records continue to ancestor handlers.
    #[must_use]
    pub fn propagate(&self) -> bool {
        self.propagate.load(Ordering::Relaxed)
    }

    /// Enables or disables propagation to ancestor handlers.
    pub fn set_propagate(&self, propagate: bool) {
        self.propagate.store(propagate, Ordering::Relaxed);
    }

    /// Whether this logger is switched off entirely.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Switches this logger off or back on.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::Relaxed);
    }

    /// Attaches a handler. Attaching the same handler twice is a no-op.
    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if !handlers.iter().any(|existing| Arc::ptr_eq(existing, &handler)) {
            handlers.push(handler);
        }
    }

    /// Detaches a handler previously attached with [`add_handler`](Self::add_handler).
    pub fn remove_handler(&self, handler: &Arc<dyn Handler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|existing| !Arc::ptr_eq(existing, handler));
    }

    /// Detaches every handler.
    pub fn clear_handlers(&self) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Handlers attached directly to this logger.
    #[must_use]
    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reports whether this logger or a propagating ancestor has handlers.
    #[must_use]
    pub fn has_handlers(&self) -> bool {
        if !self.handlers().is_empty() {
            return true;
        }
        let mut next = if self.propagate() { self.parent() } else { None };
        while let Some(logger) = next {
            if !logger.handlers().is_empty() {
                return true;
            }
            next = if logger.propagate() { logger.parent() } else { None };
        }
        false
    }

    /// Replaces the emission primitive.
    pub fn set_emitter(&self, emitter: Arc<dyn Emit>) {
        *self.emitter.write().unwrap_or_else(PoisonError::into_inner) = emitter;
    }

    /// Restores the default [`Dispatch`] emitter.
    pub fn reset_emitter(&self) {
        self.set_emitter(Arc::new(Dispatch));
    }

    /// Logs `args` at `level` if the level is enabled.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            self.emit(level, args);
        }
    }

    /// Logs at [`Level::DEBUG`].
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    /// Logs at [`Level::INFO`].
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    /// Logs at [`Level::WARNING`].
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Level::WARNING, args);
    }

    /// Logs at [`Level::ERROR`].
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    /// Logs at [`Level::CRITICAL`].
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(Level::CRITICAL, args);
    }

    /// Hands `args` to the emission primitive without checking the level.
    ///
    /// Callers are expected to have checked [`is_enabled_for`](Self::is_enabled_for)
    /// first; the caller location is forwarded through `#[track_caller]`.
    #[track_caller]
    pub fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        let emitter = self
            .emitter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        emitter.emit(self, level, args, Location::caller());
    }

    /// Offers `record` to this logger's handlers and those of its ancestors.
    ///
    /// The walk stops after a logger whose `propagate` flag is off. When no
    /// handler is found anywhere, the manager's last-resort handler gets the
    /// record if its level admits it.
    pub fn handle(&self, record: &Record) {
        if self.disabled() {
            return;
        }

        let mut found = self.offer(record);
        let mut next = if self.propagate() { self.parent() } else { None };
        while let Some(logger) = next {
            found += logger.offer(record);
            next = if logger.propagate() { logger.parent() } else { None };
        }

        if found == 0 {
            if let Some(handler) = self.shared.last_resort() {
                if record.level >= handler.level() {
                    handler.handle(record);
                }
            }
        }
    }

    fn offer(&self, record: &Record) -> usize {
        let handlers = self.handlers();
        for handler in &handlers {
            if record.level >= handler.level() {
                handler.handle(record);
            }
        }
        handlers.len()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("class", &self.class.class_name())
            .field("level", &self.level())
            .field("propagate", &self.propagate())
            .finish_non_exhaustive()
    }
}
