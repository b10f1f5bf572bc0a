#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the emission side of the workspace: a hierarchy of named
//! [`Logger`]s owned by a [`Manager`], the [`Record`]s they produce and the
//! [`Handler`]s that receive them. Levels and their labels come from the
//! [`levels`] crate, so custom levels registered there show up in every
//! record and formatter.
//!
//! # Design
//!
//! - Loggers are addressed by dotted names. The manager infers each logger's
//!   parent from its name, creating placeholders for ancestors that have not
//!   been requested yet and re-parenting descendants once they are.
//! - Messages travel as [`fmt::Arguments`](std::fmt::Arguments); the level
//!   check runs before anything is formatted.
//! - The final step of every emission goes through the [`Emit`] trait. The
//!   default [`Dispatch`] builds a [`Record`] and walks the handler chain; a
//!   replacement can be installed per logger.
//! - The class a manager stamps on new loggers is a swappable
//!   [`LoggerClass`] value, which lets wrapper crates check whether a logger
//!   was created for them.
//!
//! # Invariants
//!
//! - [`Manager::get_logger`] returns the same `Arc` for the same name.
//! - A record reaches a handler only if both the logger's effective level and
//!   the handler's own level admit it.
//! - When no handler is found on the propagation path, the manager's
//!   last-resort handler (stderr, `WARNING`) receives the record.
//!
//! # Examples
//!
//! ```
//! use levels::Level;
//! use logging::{CaptureHandler, Manager};
//! use std::sync::Arc;
//!
//! let manager = Manager::with_last_resort(None);
//! let capture = Arc::new(CaptureHandler::new());
//! manager.root().add_handler(capture.clone());
//!
//! let db = manager.get_logger("app.db");
//! db.set_level(Level::DEBUG);
//! db.debug(format_args!("opened {} connections", 4));
//!
//! let records = capture.records();
//! assert_eq!(records[0].name, "app.db");
//! assert_eq!(records[0].message, "opened 4 connections");
//! ```
//!
//! # See also
//!
//! - [`LoggingConfig`] for setting levels from verbosity counts, directive
//!   strings or the environment.

mod config;
mod error;
mod formatter;
mod handler;
mod line_mode;
mod logger;
mod macros;
mod manager;
mod record;
mod stream;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{DEFAULT_ENV_VAR, LoggingConfig};
pub use error::{ClassMismatch, ConfigError, ConfigResult};
pub use formatter::{DEFAULT_FORMAT, Formatter};
pub use handler::{CaptureHandler, Handler};
pub use line_mode::LineMode;
pub use logger::{Dispatch, Emit, Logger, LoggerClass, StandardClass};
pub use manager::{
    Manager, ROOT_NAME, disable, get_logger, logger_class, manager, root, set_logger_class,
};
pub use record::Record;
pub use stream::StreamHandler;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
