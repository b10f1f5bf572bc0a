//! crates/logging/src/manager.rs
//! The named-logger factory and its process-wide instance.
//!
//! Loggers form a tree by dotted name. The manager infers each logger's
//! parent from the longest existing prefix of its name; prefixes that have
//! no logger yet hold a placeholder listing the descendants waiting on them,
//! so creating `a.b` after `a.b.c` re-parents `a.b.c` under the new logger.

use std::sync::atomic::Ordering;
use std::sync::{Arc, LazyLock, Mutex, PoisonError, RwLock};

use levels::Level;
use rustc_hash::FxHashMap;

use crate::handler::Handler;
use crate::logger::{Logger, LoggerClass, Shared, StandardClass};
use crate::stream::StreamHandler;

/// Name of the root logger.
pub const ROOT_NAME: &str = "root";

enum Node {
    Logger(Arc<Logger>),
    Placeholder(Vec<Arc<Logger>>),
}

/// Factory and registry of named loggers.
///
/// Every manager owns a root logger (level `WARNING`), a table of named
/// loggers, the default-logger-class slot, and a process-wide `disable`
/// threshold. A last-resort handler writing to stderr receives records at
/// `WARNING` or above when no logger on the path has a handler.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::Manager;
///
/// let manager = Manager::new();
/// let leaf = manager.get_logger("app.db.pool");
/// assert!(Arc::ptr_eq(&leaf.parent().unwrap(), &manager.root()));
///
/// let db = manager.get_logger("app.db");
/// assert!(Arc::ptr_eq(&leaf.parent().unwrap(), &db));
/// assert!(Arc::ptr_eq(&manager.get_logger("app.db"), &db));
/// ```
pub struct Manager {
    root: Arc<Logger>,
    shared: Arc<Shared>,
    class: RwLock<Arc<dyn LoggerClass>>,
    table: Mutex<FxHashMap<String, Node>>,
}

impl Manager {
    /// Creates a manager with a stderr last-resort handler.
    #[must_use]
    pub fn new() -> Self {
        let last_resort: Arc<dyn Handler> =
            Arc::new(StreamHandler::stderr().with_level(Level::WARNING));
        Self::with_last_resort(Some(last_resort))
    }

    /// Creates a manager with an explicit last-resort handler, or none.
    #[must_use]
    pub fn with_last_resort(last_resort: Option<Arc<dyn Handler>>) -> Self {
        let shared = Arc::new(Shared::new(last_resort));
        let root = Arc::new(Logger::new(
            ROOT_NAME,
            Arc::new(StandardClass),
            Arc::clone(&shared),
        ));
        root.set_level(Level::WARNING);
        Self {
            root,
            shared,
            class: RwLock::new(Arc::new(StandardClass)),
            table: Mutex::new(FxHashMap::default()),
        }
    }

    /// The root logger.
    #[must_use]
    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// Class stamped onto loggers created from now on.
    #[must_use]
    pub fn logger_class(&self) -> Arc<dyn LoggerClass> {
        self.class
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the default-logger-class slot.
    ///
    /// Loggers that already exist keep the class they were created with.
    pub fn set_logger_class(&self, class: Arc<dyn LoggerClass>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "logging::manager", class = class.class_name(), "logger class changed");
        *self.class.write().unwrap_or_else(PoisonError::into_inner) = class;
    }

    /// Suppresses every call at or below `level`, across all loggers.
    pub fn disable(&self, level: Level) {
        self.shared.disable.store(level.rank(), Ordering::Relaxed);
    }

    /// Current `disable` threshold.
    #[must_use]
    pub fn disabled_threshold(&self) -> Level {
        Level::new(self.shared.disable.load(Ordering::Relaxed))
    }

    /// Replaces the last-resort handler.
    pub fn set_last_resort(&self, handler: Option<Arc<dyn Handler>>) {
        *self
            .shared
            .last_resort
            .write()
            .unwrap_or_else(PoisonError::into_inner) = handler;
    }

    /// Returns the logger called `name`, creating it if needed.
    ///
    /// An empty name, or the name of the root logger, returns the root.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if name.is_empty() || name == ROOT_NAME {
            return self.root();
        }

        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let waiting = match table.get(name) {
            Some(Node::Logger(logger)) => return Arc::clone(logger),
            Some(Node::Placeholder(children)) => Some(children.clone()),
            None => None,
        };

        let logger = Arc::new(Logger::new(
            name,
            self.logger_class(),
            Arc::clone(&self.shared),
        ));
        table.insert(name.to_owned(), Node::Logger(Arc::clone(&logger)));
        if let Some(children) = waiting {
            Self::fixup_children(&children, &logger);
        }
        self.fixup_parents(&mut table, &logger);
        logger
    }

    /// Creates a logger outside the table.
    ///
    /// The logger shares this manager's `disable` threshold and last-resort
    /// handler but has no parent and is not returned by
    /// [`get_logger`](Self::get_logger).
    #[must_use]
    pub fn detached(&self, name: &str, class: Arc<dyn LoggerClass>) -> Arc<Logger> {
        Arc::new(Logger::new(name, class, Arc::clone(&self.shared)))
    }

    /// Returns `true` when a logger (not a placeholder) exists for `name`.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        matches!(
            self.table
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(name),
            Some(Node::Logger(_))
        )
    }

    /// Every named logger, sorted by name. The root is not included.
    #[must_use]
    pub fn loggers(&self) -> Vec<Arc<Logger>> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let mut loggers: Vec<_> = table
            .values()
            .filter_map(|node| match node {
                Node::Logger(logger) => Some(Arc::clone(logger)),
                Node::Placeholder(_) => None,
            })
            .collect();
        loggers.sort_by(|a, b| a.name().cmp(b.name()));
        loggers
    }

    fn fixup_parents(&self, table: &mut FxHashMap<String, Node>, logger: &Arc<Logger>) {
        let name = logger.name();
        let mut parent = None;
        let mut dot = name.rfind('.');

        while let Some(i) = dot {
            if i == 0 {
                break;
            }
            let prefix = &name[..i];
            match table.get_mut(prefix) {
                Some(Node::Logger(existing)) => {
                    parent = Some(Arc::clone(existing));
                    break;
                }
                Some(Node::Placeholder(children)) => {
                    if !children.iter().any(|child| Arc::ptr_eq(child, logger)) {
                        children.push(Arc::clone(logger));
                    }
                }
                None => {
                    table.insert(
                        prefix.to_owned(),
                        Node::Placeholder(vec![Arc::clone(logger)]),
                    );
                }
            }
            dot = previous_dot(name, i);
        }

        logger.set_parent(Some(parent.unwrap_or_else(|| self.root())));
    }

    fn fixup_children(children: &[Arc<Logger>], logger: &Arc<Logger>) {
        let name = logger.name();
        for child in children {
            let Some(current) = child.parent() else {
                continue;
            };
            if !current.name().starts_with(name) {
                logger.set_parent(Some(current));
                child.set_parent(Some(Arc::clone(logger)));
            }
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("class", &self.logger_class().class_name())
            .field("disable", &self.disabled_threshold())
            .finish_non_exhaustive()
    }
}

/// Position of the next dot to the left of `i`, skipping a dot at `i - 1`.
fn previous_dot(name: &str, i: usize) -> Option<usize> {
    let head = &name[..i];
    match head.rfind('.') {
        Some(j) if j + 1 == i => head[..j].rfind('.'),
        other => other,
    }
}

static MANAGER: LazyLock<Manager> = LazyLock::new(Manager::new);

/// The process-wide manager.
#[must_use]
pub fn manager() -> &'static Manager {
    &MANAGER
}

/// Returns the logger called `name` from the process-wide manager.
pub fn get_logger(name: &str) -> Arc<Logger> {
    MANAGER.get_logger(name)
}

/// The process-wide root logger.
#[must_use]
pub fn root() -> Arc<Logger> {
    MANAGER.root()
}

/// Replaces the process-wide default-logger-class slot.
pub fn set_logger_class(class: Arc<dyn LoggerClass>) {
    MANAGER.set_logger_class(class);
}

/// The process-wide default logger class.
#[must_use]
pub fn logger_class() -> Arc<dyn LoggerClass> {
    MANAGER.logger_class()
}

/// Suppresses every call at or below `level` in the process-wide manager.
pub fn disable(level: Level) {
    MANAGER.disable(level);
}
