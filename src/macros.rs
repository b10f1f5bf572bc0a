//! src/macros.rs
//! `format!`-style shorthands for the custom level methods.

/// Logs at `SPAM` through a [`VerboseLogger`](crate::VerboseLogger).
///
/// ```
/// use verboselogs::{VerboseLogger, spam};
///
/// let logger = VerboseLogger::new("demo.spam");
/// spam!(logger, "tick {}", 1);
/// ```
#[macro_export]
macro_rules! spam {
    ($logger:expr, $($arg:tt)+) => {
        $logger.spam(::core::format_args!($($arg)+))
    };
}

/// Logs at `VERBOSE` through a [`VerboseLogger`](crate::VerboseLogger).
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $logger.verbose(::core::format_args!($($arg)+))
    };
}

/// Logs at `NOTICE` through a [`VerboseLogger`](crate::VerboseLogger).
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $logger.notice(::core::format_args!($($arg)+))
    };
}

/// Logs at `SUCCESS` through a [`VerboseLogger`](crate::VerboseLogger).
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $logger.success(::core::format_args!($($arg)+))
    };
}
