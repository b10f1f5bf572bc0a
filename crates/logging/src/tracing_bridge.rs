//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into the named logger hierarchy.
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that forwards every event to
//! the logger named after the event's target, so code instrumented with the
//! standard `tracing` macros feeds the same handlers as direct logger calls.
//!
//! # Mapping
//!
//! - Targets use `::` separators; they become dotted logger names
//!   (`app::db` logs through `app.db`).
//! - `ERROR`, `WARN`, `INFO` and `DEBUG` map to the levels of the same name;
//!   `TRACE` maps to `SPAM`.
//! - An integer `rank` field overrides the mapping, which makes `VERBOSE`,
//!   `NOTICE` and `SUCCESS` reachable: `tracing::info!(rank = 25, "…")`.
//! - Events targeting this crate or the `levels` crate are ignored so the
//!   diagnostics they emit never loop back into the hierarchy.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::init_tracing;
//!
//! init_tracing(logging::manager())?;
//! tracing::info!(target: "app::db", "connected");
//! ```

use std::fmt;

use levels::Level;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::manager::Manager;

const IGNORED_TARGETS: [&str; 2] = ["logging", "levels"];

/// A tracing layer that routes events to loggers of a [`Manager`].
#[derive(Clone, Copy, Debug)]
pub struct LoggerLayer {
    manager: &'static Manager,
}

impl LoggerLayer {
    /// Creates a layer feeding `manager`.
    #[must_use]
    pub const fn new(manager: &'static Manager) -> Self {
        Self { manager }
    }

    /// Converts a tracing target into a logger name.
    fn logger_name(target: &str) -> String {
        target.replace("::", ".")
    }

    fn is_ignored(target: &str) -> bool {
        let crate_name = target.split("::").next().unwrap_or(target);
        IGNORED_TARGETS.contains(&crate_name)
    }

    /// Maps a tracing level to a logging level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARNING,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::TRACE => Level::SPAM,
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if Self::is_ignored(target) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = visitor
            .rank
            .map_or_else(|| Self::map_level(metadata.level()), Level::new);
        let logger = self.manager.get_logger(&Self::logger_name(target));
        if !logger.is_enabled_for(level) {
            return;
        }

        let message = visitor.message.unwrap_or_default();
        logger.emit(level, format_args!("{message}"));
    }
}

/// Collects the `message` and `rank` fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    rank: Option<i32>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "rank" {
            self.rank = i32::try_from(value).ok();
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "rank" {
            self.rank = i32::try_from(value).ok();
        } else {
            self.record_debug(field, &value);
        }
    }
}

/// Installs a global subscriber that forwards tracing events to `manager`.
///
/// # Errors
///
/// Fails when a global default subscriber has already been set.
pub fn init_tracing(manager: &'static Manager) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(manager))
        .try_init()
}
