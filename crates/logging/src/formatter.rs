//! crates/logging/src/formatter.rs
//! Template-based rendering of records into text.

use crate::record::Record;

/// Template used when no other format is configured.
pub const DEFAULT_FORMAT: &str = "{levelname}:{name}:{message}";

/// Renders a [`Record`] through a template.
///
/// The template may reference these placeholders:
///
/// | Placeholder   | Value                         |
/// |---------------|-------------------------------|
/// | `{levelname}` | registered label of the level |
/// | `{levelno}`   | numeric rank                  |
/// | `{name}`      | logger name                   |
/// | `{message}`   | formatted message             |
/// | `{file}`      | source file of the call       |
/// | `{line}`      | source line of the call       |
///
/// Unknown placeholders are copied through unchanged.
///
/// # Examples
///
/// ```
/// use std::panic::Location;
/// use levels::Level;
/// use logging::{Formatter, Record};
///
/// let record = Record::new("db", Level::NOTICE, format_args!("pool ready"), Location::caller());
/// let formatter = Formatter::new("[{levelname}] {name} ({levelno}): {message}");
/// assert_eq!(formatter.format(&record), "[NOTICE] db (25): pool ready");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Formatter {
    template: String,
}

impl Formatter {
    /// Creates a formatter from `template`.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Returns the template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Renders `record`.
    #[must_use]
    pub fn format(&self, record: &Record) -> String {
        let mut out = String::with_capacity(self.template.len() + record.message.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                rest = &rest[open..];
                break;
            };
            let key = &after[..close];
            match key {
                "levelname" => out.push_str(&record.level_name),
                "levelno" => out.push_str(&record.level.rank().to_string()),
                "name" => out.push_str(&record.name),
                "message" => out.push_str(&record.message),
                "file" => out.push_str(record.file),
                "line" => out.push_str(&record.line.to_string()),
                _ => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}
