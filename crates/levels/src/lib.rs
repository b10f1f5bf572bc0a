#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levels` defines the numeric severity ranks used by the workspace's
//! loggers and the registry that maps ranks to symbolic names. On top of the
//! standard ladder (`DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`) it
//! registers four extra levels:
//!
//! | Name      | Rank | Position                    |
//! |-----------|------|-----------------------------|
//! | `SPAM`    | 5    | between `NOTSET` and `DEBUG` |
//! | `VERBOSE` | 15   | between `DEBUG` and `INFO`   |
//! | `NOTICE`  | 25   | between `INFO` and `WARNING` |
//! | `SUCCESS` | 35   | between `WARNING` and `ERROR`|
//!
//! The ranks are part of the public contract: downstream filters compare
//! against the numbers, so they never change between releases.
//!
//! # Design
//!
//! [`LevelRegistry`] is a plain value that can be created and passed around
//! explicitly. The crate also keeps one process-wide registry, created on
//! first use with the built-in and custom levels already registered, and
//! exposes free functions ([`add_log_level`], [`level_name`],
//! [`level_for_name`], [`resolve_level`]) that operate on it.
//!
//! # Invariants
//!
//! - After [`add_log_level`]`(v, n)` the global registry maps `v -> n` and
//!   `n -> v`.
//! - Registering the same pair twice leaves the registry unchanged.
//! - Colliding registrations are not rejected: the last one wins.
//!
//! # Examples
//!
//! ```
//! use levels::{add_log_level, level_for_name, level_name, Level};
//!
//! assert_eq!(level_for_name("VERBOSE"), Some(Level::VERBOSE));
//!
//! add_log_level(Level::new(7), "TRACE");
//! assert_eq!(level_name(Level::new(7)), "TRACE");
//! assert_eq!(level_for_name("TRACE"), Some(Level::new(7)));
//! ```

use std::sync::{LazyLock, PoisonError, RwLock};

mod error;
mod level;
mod registry;

pub use error::ParseLevelError;
pub use level::Level;
pub use registry::{BUILTIN_LEVELS, CUSTOM_LEVELS, LevelRegistry};

/// Alias for [`Level::NOTSET`].
pub const NOTSET: Level = Level::NOTSET;
/// Alias for [`Level::SPAM`].
pub const SPAM: Level = Level::SPAM;
/// Alias for [`Level::DEBUG`].
pub const DEBUG: Level = Level::DEBUG;
/// Alias for [`Level::VERBOSE`].
pub const VERBOSE: Level = Level::VERBOSE;
/// Alias for [`Level::INFO`].
pub const INFO: Level = Level::INFO;
/// Alias for [`Level::NOTICE`].
pub const NOTICE: Level = Level::NOTICE;
/// Alias for [`Level::WARNING`].
pub const WARNING: Level = Level::WARNING;
/// Alias for [`Level::SUCCESS`].
pub const SUCCESS: Level = Level::SUCCESS;
/// Alias for [`Level::ERROR`].
pub const ERROR: Level = Level::ERROR;
/// Alias for [`Level::CRITICAL`].
pub const CRITICAL: Level = Level::CRITICAL;

static GLOBAL: LazyLock<RwLock<LevelRegistry>> =
    LazyLock::new(|| RwLock::new(LevelRegistry::with_custom_levels()));

/// Registers a level name in the process-wide registry.
///
/// `name` becomes the display label of `value`, and `value` becomes reachable
/// through `name`. Existing labels for `value` and existing ranks for `name`
/// are overwritten without complaint; avoid colliding with built-in levels.
pub fn add_log_level(value: Level, name: &str) {
    let previous = GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .add_level_name(value, name);

    #[cfg(feature = "tracing")]
    match previous.as_deref() {
        Some(old) if old != name => tracing::debug!(
            target: "levels",
            rank = value.rank(),
            previous = old,
            name,
            "level label overwritten"
        ),
        Some(_) => {}
        None => tracing::trace!(target: "levels", rank = value.rank(), name, "level registered"),
    }
    #[cfg(not(feature = "tracing"))]
    let _ = previous;
}

/// Returns the label registered for `level`, or `Level N`.
#[must_use]
pub fn level_name(level: Level) -> String {
    with_registry(|registry| registry.name_of(level).into_owned())
}

/// Looks up the rank registered under `name`.
#[must_use]
pub fn level_for_name(name: &str) -> Option<Level> {
    with_registry(|registry| registry.level_of(name))
}

/// Resolves a level token (name or integer) against the global registry.
pub fn resolve_level(token: &str) -> Result<Level, ParseLevelError> {
    with_registry(|registry| registry.resolve(token))
}

/// Runs `f` with shared access to the process-wide registry.
pub fn with_registry<R>(f: impl FnOnce(&LevelRegistry) -> R) -> R {
    let guard = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Returns a copy of the process-wide registry.
#[must_use]
pub fn snapshot() -> LevelRegistry {
    with_registry(LevelRegistry::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_levels_are_registered_globally() {
        for (name, level) in CUSTOM_LEVELS {
            assert_eq!(level_name(level), name);
            assert_eq!(level_for_name(name), Some(level));
        }
    }

    #[test]
    fn add_log_level_is_visible_both_ways() {
        add_log_level(Level::new(1_001), "UNIT_ONE");
        assert_eq!(level_name(Level::new(1_001)), "UNIT_ONE");
        assert_eq!(level_for_name("UNIT_ONE"), Some(Level::new(1_001)));
    }

    #[test]
    fn add_log_level_twice_is_idempotent() {
        add_log_level(Level::new(1_002), "UNIT_TWO");
        let before = snapshot();
        add_log_level(Level::new(1_002), "UNIT_TWO");
        let after = snapshot();

        assert_eq!(before.name_of(Level::new(1_002)), after.name_of(Level::new(1_002)));
        assert_eq!(before.level_of("UNIT_TWO"), after.level_of("UNIT_TWO"));
    }

    #[test]
    fn resolve_level_uses_global_names() {
        assert_eq!(resolve_level("verbose"), Ok(VERBOSE));
        assert_eq!(resolve_level("success"), Ok(SUCCESS));
    }

    #[test]
    fn module_constants_match_associated_constants() {
        assert_eq!(SPAM, Level::new(5));
        assert_eq!(VERBOSE, Level::new(15));
        assert_eq!(NOTICE, Level::new(25));
        assert_eq!(SUCCESS, Level::new(35));
    }
}
