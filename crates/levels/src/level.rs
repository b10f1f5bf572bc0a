//! crates/levels/src/level.rs
//! The numeric severity rank shared by every logger in the workspace.

use std::fmt;

/// A severity level identified by its numeric rank.
///
/// Ranks are totally ordered and comparable across built-in and registered
/// levels: a logger whose threshold is [`Level::INFO`] admits
/// [`Level::NOTICE`] but not [`Level::VERBOSE`]. Any `i32` is a valid rank,
/// including negative values; the registry decides what name a rank carries.
///
/// The [`Display`](fmt::Display) implementation renders the name registered
/// in the process-wide registry, falling back to `Level N`.
///
/// # Examples
///
/// ```
/// use levels::Level;
///
/// assert!(Level::VERBOSE > Level::DEBUG);
/// assert!(Level::VERBOSE < Level::INFO);
/// assert_eq!(Level::SPAM.rank(), 5);
/// assert_eq!(Level::NOTICE.to_string(), "NOTICE");
/// assert_eq!(Level::new(17).to_string(), "Level 17");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Level(i32);

impl Level {
    /// Floor of the ladder; a logger at this level defers to its parent.
    pub const NOTSET: Self = Self(0);
    /// Noisier than debug output.
    pub const SPAM: Self = Self(5);
    /// Low level debugging information.
    pub const DEBUG: Self = Self(10);
    /// High level debugging information, shown in verbose mode.
    pub const VERBOSE: Self = Self(15);
    /// Normal progress information.
    pub const INFO: Self = Self(20);
    /// Noteworthy conditions that are not warnings.
    pub const NOTICE: Self = Self(25);
    /// Potentially harmful situations.
    pub const WARNING: Self = Self(30);
    /// Successful completion of a notable operation.
    pub const SUCCESS: Self = Self(35);
    /// Errors that still allow the program to continue.
    pub const ERROR: Self = Self(40);
    /// Failures that prevent the program from continuing.
    pub const CRITICAL: Self = Self(50);

    /// Wraps a raw rank.
    #[must_use]
    pub const fn new(rank: i32) -> Self {
        Self(rank)
    }

    /// Returns the numeric rank.
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }

    /// Returns `true` for [`Level::NOTSET`].
    #[must_use]
    pub const fn is_notset(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Level {
    fn from(rank: i32) -> Self {
        Self(rank)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::level_name(*self))
    }
}
