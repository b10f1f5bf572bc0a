//! crates/logging/src/macros.rs
//! Formatting macros over [`Logger::log`](crate::Logger::log).

/// Logs a `format!`-style message at an explicit level.
///
/// The arguments are only formatted when the level is enabled.
///
/// ```
/// use levels::Level;
/// use logging::{CaptureHandler, Manager, log_at};
/// use std::sync::Arc;
///
/// let manager = Manager::with_last_resort(None);
/// let capture = Arc::new(CaptureHandler::new());
/// manager.root().add_handler(capture.clone());
///
/// let logger = manager.get_logger("app");
/// log_at!(logger, Level::ERROR, "disk {} is full", "sda1");
/// log_at!(logger, Level::DEBUG, "hidden");
///
/// assert_eq!(capture.records()[0].message, "disk sda1 is full");
/// assert_eq!(capture.len(), 1);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}
