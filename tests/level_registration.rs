//! Registration of levels in the global registry.

use verboselogs::{Level, add_log_level, level_for_name, level_name};

#[test]
fn custom_levels_are_registered_on_first_use() {
    for (name, rank) in [("SPAM", 5), ("VERBOSE", 15), ("NOTICE", 25), ("SUCCESS", 35)] {
        assert_eq!(level_name(Level::new(rank)), name);
        assert_eq!(level_for_name(name), Some(Level::new(rank)));
    }
}

#[test]
fn added_level_resolves_both_ways() {
    add_log_level(Level::new(7), "CHATTY");
    assert_eq!(level_name(Level::new(7)), "CHATTY");
    assert_eq!(level_for_name("CHATTY"), Some(Level::new(7)));
    assert_eq!(Level::new(7).to_string(), "CHATTY");
}

#[test]
fn registering_verbose_twice_is_idempotent() {
    add_log_level(Level::VERBOSE, "VERBOSE");
    let once = (level_name(Level::VERBOSE), level_for_name("VERBOSE"));
    add_log_level(Level::VERBOSE, "VERBOSE");
    let twice = (level_name(Level::VERBOSE), level_for_name("VERBOSE"));

    assert_eq!(once, twice);
    assert_eq!(once, ("VERBOSE".to_owned(), Some(Level::VERBOSE)));
}

#[test]
fn snapshot_is_unchanged_by_repeated_registration() {
    let mut registry = levels::snapshot();
    let before = registry.clone();
    registry.add_level_name(Level::VERBOSE, "VERBOSE");
    registry.add_level_name(Level::VERBOSE, "VERBOSE");
    assert_eq!(registry, before);
}
