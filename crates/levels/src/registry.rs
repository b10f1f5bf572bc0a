//! crates/levels/src/registry.rs
//! Bidirectional rank/name table for severity levels.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::error::ParseLevelError;
use crate::level::Level;

/// Built-in levels in the order they are registered.
pub const BUILTIN_LEVELS: [(&str, Level); 6] = [
    ("CRITICAL", Level::CRITICAL),
    ("ERROR", Level::ERROR),
    ("WARNING", Level::WARNING),
    ("INFO", Level::INFO),
    ("DEBUG", Level::DEBUG),
    ("NOTSET", Level::NOTSET),
];

/// Alternate spellings that resolve to a built-in rank without owning its label.
const BUILTIN_ALIASES: [(&str, Level); 2] = [("FATAL", Level::CRITICAL), ("WARN", Level::WARNING)];

/// The additional levels this workspace registers, in registration order.
pub const CUSTOM_LEVELS: [(&str, Level); 4] = [
    ("NOTICE", Level::NOTICE),
    ("SPAM", Level::SPAM),
    ("SUCCESS", Level::SUCCESS),
    ("VERBOSE", Level::VERBOSE),
];

/// Mapping between level ranks and their symbolic names.
///
/// The table keeps two maps: rank to display label and name to rank.
/// [`add_level_name`](Self::add_level_name) writes both. Re-registering a
/// rank under a new name replaces its label but leaves the old name resolving
/// to the rank; re-registering a name with a new rank silently moves the name.
/// Neither case is validated.
///
/// # Examples
///
/// ```
/// use levels::{Level, LevelRegistry};
///
/// let mut registry = LevelRegistry::new();
/// assert_eq!(registry.level_of("VERBOSE"), None);
///
/// registry.add_level_name(Level::new(15), "VERBOSE");
/// assert_eq!(registry.name_of(Level::new(15)), "VERBOSE");
/// assert_eq!(registry.level_of("VERBOSE"), Some(Level::VERBOSE));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelRegistry {
    names: BTreeMap<Level, String>,
    ranks: FxHashMap<String, Level>,
}

impl LevelRegistry {
    /// Creates a registry with no levels at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
            ranks: FxHashMap::default(),
        }
    }

    /// Creates a registry holding only the built-in levels.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, level) in BUILTIN_LEVELS {
            registry.add_level_name(level, name);
        }
        for (alias, level) in BUILTIN_ALIASES {
            registry.ranks.insert(alias.to_owned(), level);
        }
        registry
    }

    /// Creates a registry holding the built-in levels plus [`CUSTOM_LEVELS`].
    #[must_use]
    pub fn with_custom_levels() -> Self {
        let mut registry = Self::new();
        for (name, level) in CUSTOM_LEVELS {
            registry.add_level_name(level, name);
        }
        registry
    }

    /// Registers `name` as the label of `level` and `level` as the value of `name`.
    ///
    /// Returns the label previously associated with `level`, if any.
    pub fn add_level_name(&mut self, level: Level, name: impl Into<String>) -> Option<String> {
        let name = name.into();
        self.ranks.insert(name.clone(), level);
        self.names.insert(level, name)
    }

    /// Returns the label for `level`, or `Level N` when none is registered.
    #[must_use]
    pub fn name_of(&self, level: Level) -> Cow<'_, str> {
        match self.names.get(&level) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("Level {}", level.rank())),
        }
    }

    /// Looks up the rank registered under `name` (exact match).
    #[must_use]
    pub fn level_of(&self, name: &str) -> Option<Level> {
        self.ranks.get(name).copied()
    }

    /// Resolves a user-supplied token into a level.
    ///
    /// Integers are accepted verbatim. Names are matched exactly first and
    /// then case-insensitively against the upper-case convention, so
    /// `verbose`, `Verbose` and `VERBOSE` all resolve to the same rank.
    pub fn resolve(&self, token: &str) -> Result<Level, ParseLevelError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ParseLevelError::Empty);
        }
        if let Ok(rank) = token.parse::<i32>() {
            return Ok(Level::new(rank));
        }
        self.level_of(token)
            .or_else(|| self.level_of(&token.to_ascii_uppercase()))
            .ok_or_else(|| ParseLevelError::Unknown(token.to_owned()))
    }

    /// Returns every labelled rank in ascending order.
    #[must_use]
    pub fn ladder(&self) -> Vec<Level> {
        self.names.keys().copied().collect()
    }

    /// Iterates over `(level, label)` pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &str)> {
        self.names.iter().map(|(level, name)| (*level, name.as_str()))
    }

    /// Number of labelled ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no rank carries a label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
