#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `verboselogs` adds four severity levels to the workspace's hierarchical
//! logging facility and a logger type with a method for each of them:
//!
//! | Level     | Rank | Method                     |
//! |-----------|------|----------------------------|
//! | `SPAM`    | 5    | [`VerboseLogger::spam`]    |
//! | `VERBOSE` | 15   | [`VerboseLogger::verbose`] |
//! | `NOTICE`  | 25   | [`VerboseLogger::notice`]  |
//! | `SUCCESS` | 35   | [`VerboseLogger::success`] |
//!
//! The ranks slot between the built-in `DEBUG` (10), `INFO` (20),
//! `WARNING` (30) and `ERROR` (40) levels and never change, so numeric
//! thresholds keep working across releases.
//!
//! # Design
//!
//! - The level names are registered in the global registry of the
//!   [`levels`] crate the first time it is used.
//! - [`VerboseLogger`] wraps a [`Logger`] instead of replacing it; everything
//!   a plain logger does is reachable through `Deref`.
//! - [`install`] swaps the factory's default logger class so that every logger
//!   created afterwards through [`get_logger`] is a verbose one. Loggers created
//!   earlier keep their class.
//!
//! # Examples
//!
//! ```
//! use verboselogs::{VerboseLogger, get_logger, install, notice};
//!
//! install();
//! let logger = VerboseLogger::try_from(get_logger("service.api"))?;
//! notice!(logger, "listening on port {}", 8080);
//! # Ok::<(), verboselogs::ClassMismatch>(())
//! ```

mod logger;
mod macros;

use std::sync::Arc;

pub use levels::{
    CRITICAL, DEBUG, ERROR, INFO, Level, NOTICE, NOTSET, SPAM, SUCCESS, VERBOSE, WARNING,
    add_log_level, level_for_name, level_name,
};
#[cfg(feature = "lint")]
pub use lint_shim as lint;
pub use logger::{VerboseClass, VerboseLogger};
pub use logging::{ClassMismatch, Logger, Manager, log_at};

/// Makes [`VerboseLogger`] the class of loggers created by the global factory.
///
/// Only loggers created after the call are affected.
pub fn install() {
    install_in(logging::manager());
}

/// Like [`install`], for an explicit manager.
pub fn install_in(manager: &Manager) {
    manager.set_logger_class(Arc::new(VerboseClass));
}

/// Returns the logger named `name` from the global factory.
///
/// An empty name returns the root logger.
#[must_use]
pub fn get_logger(name: &str) -> Arc<Logger> {
    logging::get_logger(name)
}
