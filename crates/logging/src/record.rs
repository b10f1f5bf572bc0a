//! crates/logging/src/record.rs
//! The unit of data handed to handlers.

use std::fmt;
use std::panic::Location;
use std::time::SystemTime;

use levels::Level;

/// A single emitted log event.
///
/// Records are built by the emission path only after the level check has
/// passed, so constructing one is the point where the message arguments are
/// formatted.
#[derive(Clone, Debug)]
pub struct Record {
    /// Dotted name of the logger that emitted the record.
    pub name: String,
    /// Severity of the record.
    pub level: Level,
    /// Label of [`level`](Self::level) at emission time.
    pub level_name: String,
    /// The fully formatted message.
    pub message: String,
    /// The message template when it carried no runtime arguments.
    pub literal: Option<&'static str>,
    /// Source file of the logging call.
    pub file: &'static str,
    /// Source line of the logging call.
    pub line: u32,
    /// Wall-clock time the record was created.
    pub created: SystemTime,
}

impl Record {
    /// Formats `args` and captures the caller location.
    #[must_use]
    pub fn new(
        name: &str,
        level: Level,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            level,
            level_name: levels::level_name(level),
            message: fmt::format(args),
            literal: args.as_str(),
            file: location.file(),
            line: location.line(),
            created: SystemTime::now(),
        }
    }

    /// Returns `true` when the message was built from runtime arguments.
    #[must_use]
    pub const fn has_args(&self) -> bool {
        self.literal.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_messages_have_no_args() {
        let record = Record::new(
            "app",
            Level::VERBOSE,
            format_args!("plain"),
            Location::caller(),
        );
        assert_eq!(record.message, "plain");
        assert_eq!(record.literal, Some("plain"));
        assert!(!record.has_args());
        assert_eq!(record.level_name, "VERBOSE");
    }

    #[test]
    fn formatted_messages_record_args() {
        let count = 3;
        let record = Record::new(
            "app",
            Level::INFO,
            format_args!("{count} files"),
            Location::caller(),
        );
        assert_eq!(record.message, "3 files");
        assert!(record.has_args());
    }

    #[test]
    fn location_points_at_caller() {
        let record = Record::new("app", Level::INFO, format_args!("x"), Location::caller());
        assert!(record.file.ends_with("record.rs"));
        assert!(record.line > 0);
    }
}
