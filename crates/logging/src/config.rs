//! crates/logging/src/config.rs
//! Level configuration: verbosity counts, directive strings, environment.

use std::collections::BTreeMap;
use std::env;
use std::sync::Arc;

use levels::{Level, LevelRegistry};

use crate::error::{ConfigError, ConfigResult};
use crate::formatter::Formatter;
use crate::manager::{Manager, ROOT_NAME};
use crate::stream::StreamHandler;

/// Environment variable read by [`LoggingConfig::from_env`] callers by default.
pub const DEFAULT_ENV_VAR: &str = "VERBOSELOGS_LEVEL";

/// Levels for the root logger and for individual named loggers.
///
/// # Examples
///
/// ```
/// use levels::Level;
/// use logging::LoggingConfig;
///
/// let config = LoggingConfig::parse_directives("notice,app.db=spam").unwrap();
/// assert_eq!(config.root, Level::NOTICE);
/// assert_eq!(config.loggers["app.db"], Level::SPAM);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Level of the root logger.
    pub root: Level,
    /// Levels of named loggers.
    pub loggers: BTreeMap<String, Level>,
    /// Template for the stderr handler installed by [`apply`](Self::apply).
    pub format: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            root: Level::WARNING,
            loggers: BTreeMap::new(),
            format: None,
        }
    }
}

impl LoggingConfig {
    /// Maps `-v`/`-q` counts onto the registered level ladder.
    ///
    /// Starts at `INFO`; each `verbose` step moves one registered level down
    /// (`VERBOSE`, `DEBUG`, `SPAM`), each `quiet` step one level up
    /// (`NOTICE`, `WARNING`, `SUCCESS`, ...). The result is clamped to the
    /// ends of the ladder. `NOTSET` is never selected.
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: u8) -> Self {
        levels::with_registry(|registry| Self::from_verbosity_in(registry, verbose, quiet))
    }

    /// Like [`from_verbosity`](Self::from_verbosity) against an explicit registry.
    #[must_use]
    pub fn from_verbosity_in(registry: &LevelRegistry, verbose: u8, quiet: u8) -> Self {
        let ladder: Vec<Level> = registry
            .ladder()
            .into_iter()
            .filter(|level| *level > Level::NOTSET)
            .collect();
        let Some(last) = ladder.len().checked_sub(1) else {
            return Self::default();
        };

        let start = ladder
            .iter()
            .position(|level| *level >= Level::INFO)
            .unwrap_or(last);
        let index = (start + usize::from(quiet))
            .saturating_sub(usize::from(verbose))
            .min(last);

        Self {
            root: ladder[index],
            ..Self::default()
        }
    }

    /// Parses comma-separated directives on top of the default config.
    pub fn parse_directives(directives: &str) -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_directives(directives)?;
        Ok(config)
    }

    /// Applies comma-separated directives. Empty segments are ignored.
    pub fn apply_directives(&mut self, directives: &str) -> ConfigResult<()> {
        directives
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_directive(token))
    }

    /// Applies one directive: `level` sets the root, `name=level` a logger.
    pub fn apply_directive(&mut self, directive: &str) -> ConfigResult<()> {
        let (name, level) = match directive.split_once('=') {
            Some((name, level)) => (name.trim(), level.trim()),
            None => (ROOT_NAME, directive.trim()),
        };
        if name.is_empty() || level.is_empty() {
            return Err(ConfigError::Directive(directive.to_owned()));
        }

        let level = levels::resolve_level(level).map_err(|source| ConfigError::Level {
            directive: directive.to_owned(),
            source,
        })?;

        if name == ROOT_NAME {
            self.root = level;
        } else {
            self.loggers.insert(name.to_owned(), level);
        }
        Ok(())
    }

    /// Reads directives from the environment variable `var`.
    ///
    /// An unset variable yields the default configuration.
    pub fn from_env(var: &str) -> ConfigResult<Self> {
        match env::var(var) {
            Ok(value) => Self::parse_directives(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var.to_owned())),
        }
    }

    /// Sets the configured levels on `manager`'s loggers.
    ///
    /// When [`format`](Self::format) is set and the root logger has no
    /// handlers yet, a stderr handler using that template is attached to it.
    pub fn apply(&self, manager: &Manager) {
        let root = manager.root();
        root.set_level(self.root);
        for (name, level) in &self.loggers {
            manager.get_logger(name).set_level(*level);
        }

        if let Some(template) = &self.format {
            if root.handlers().is_empty() {
                root.add_handler(Arc::new(
                    StreamHandler::stderr().with_formatter(Formatter::new(template.as_str())),
                ));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "logging::config",
            root = self.root.rank(),
            loggers = self.loggers.len(),
            "configuration applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levels::ParseLevelError;

    #[test]
    fn default_root_is_warning() {
        let config = LoggingConfig::default();
        assert_eq!(config.root, Level::WARNING);
        assert!(config.loggers.is_empty());
        assert!(config.format.is_none());
    }

    #[test]
    fn verbosity_walks_the_custom_ladder() {
        let registry = LevelRegistry::with_custom_levels();
        let root = |v, q| LoggingConfig::from_verbosity_in(&registry, v, q).root;

        assert_eq!(root(0, 0), Level::INFO);
        assert_eq!(root(1, 0), Level::VERBOSE);
        assert_eq!(root(2, 0), Level::DEBUG);
        assert_eq!(root(3, 0), Level::SPAM);
        assert_eq!(root(9, 0), Level::SPAM);
        assert_eq!(root(0, 1), Level::NOTICE);
        assert_eq!(root(0, 2), Level::WARNING);
        assert_eq!(root(0, 3), Level::SUCCESS);
        assert_eq!(root(0, 9), Level::CRITICAL);
        assert_eq!(root(2, 1), Level::VERBOSE);
    }

    #[test]
    fn verbosity_on_builtin_ladder() {
        let registry = LevelRegistry::new();
        assert_eq!(LoggingConfig::from_verbosity_in(&registry, 1, 0).root, Level::DEBUG);
        assert_eq!(LoggingConfig::from_verbosity_in(&registry, 0, 1).root, Level::WARNING);
    }

    #[test]
    fn verbosity_on_empty_registry_is_default() {
        let registry = LevelRegistry::empty();
        assert_eq!(
            LoggingConfig::from_verbosity_in(&registry, 1, 0),
            LoggingConfig::default()
        );
    }

    #[test]
    fn directives_set_root_and_loggers() {
        let config = LoggingConfig::parse_directives(" verbose , app=25, app.db = Spam ,,")
            .expect("valid directives");
        assert_eq!(config.root, Level::VERBOSE);
        assert_eq!(config.loggers["app"], Level::NOTICE);
        assert_eq!(config.loggers["app.db"], Level::SPAM);
    }

    #[test]
    fn root_directive_by_name() {
        let config = LoggingConfig::parse_directives("root=error").expect("valid");
        assert_eq!(config.root, Level::ERROR);
        assert!(config.loggers.is_empty());
    }

    #[test]
    fn malformed_directives_are_rejected() {
        assert_eq!(
            LoggingConfig::parse_directives("=debug"),
            Err(ConfigError::Directive("=debug".to_owned()))
        );
        assert_eq!(
            LoggingConfig::parse_directives("app="),
            Err(ConfigError::Directive("app=".to_owned()))
        );
    }

    #[test]
    fn unknown_levels_are_rejected() {
        let err = LoggingConfig::parse_directives("app=shouty").expect_err("unknown level");
        assert_eq!(
            err,
            ConfigError::Level {
                directive: "app=shouty".to_owned(),
                source: ParseLevelError::Unknown("shouty".to_owned()),
            }
        );
    }

    #[test]
    fn from_env_unset_is_default() {
        let config = LoggingConfig::from_env("LOGGING_CONFIG_TEST_SURELY_UNSET").expect("unset");
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn apply_sets_levels_on_manager() {
        let manager = Manager::with_last_resort(None);
        let config = LoggingConfig::parse_directives("error,svc=spam").expect("valid");
        config.apply(&manager);

        assert_eq!(manager.root().level(), Level::ERROR);
        assert_eq!(manager.get_logger("svc").level(), Level::SPAM);
        assert!(manager.root().handlers().is_empty());
    }

    #[test]
    fn apply_with_format_installs_root_handler_once() {
        let manager = Manager::with_last_resort(None);
        let config = LoggingConfig {
            format: Some("{levelname} {message}".to_owned()),
            ..LoggingConfig::default()
        };
        config.apply(&manager);
        config.apply(&manager);
        assert_eq!(manager.root().handlers().len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_ranks_and_defaults() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"loggers":{"app":15}}"#).expect("deserialize");
        assert_eq!(config.root, Level::WARNING);
        assert_eq!(config.loggers["app"], Level::VERBOSE);

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"root\":30"));
    }
}
