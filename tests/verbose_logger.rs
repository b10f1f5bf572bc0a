//! Behaviour of the level methods on `VerboseLogger`.

use std::fmt;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use logging::{CaptureHandler, Emit, Logger, Manager};
use test_support::Exploding;
use verboselogs::{Level, VerboseLogger, notice, spam, success, verbose};

/// Records what the logger hands to the emission primitive.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<(Level, Option<&'static str>)>>,
}

impl Emit for Recorder {
    fn emit(
        &self,
        _logger: &Logger,
        level: Level,
        args: fmt::Arguments<'_>,
        _location: &'static Location<'static>,
    ) {
        self.calls.lock().expect("lock").push((level, args.as_str()));
    }
}

fn captured(manager: &Manager, name: &str, level: Level) -> (VerboseLogger, Arc<CaptureHandler>) {
    let logger = VerboseLogger::new_in(manager, name);
    let capture = Arc::new(CaptureHandler::new());
    logger.add_handler(capture.clone());
    logger.set_propagate(false);
    logger.set_level(level);
    (logger, capture)
}

#[test]
fn verbose_emits_one_record_without_arguments() {
    let manager = Manager::with_last_resort(None);
    let (logger, capture) = captured(&manager, "props.enabled", Level::VERBOSE);

    logger.verbose(format_args!("msg"));

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level.rank(), 15);
    assert_eq!(records[0].message, "msg");
    assert_eq!(records[0].literal, Some("msg"));
    assert!(!records[0].has_args());
}

#[test]
fn lower_threshold_also_admits_verbose() {
    let manager = Manager::with_last_resort(None);
    let (logger, capture) = captured(&manager, "props.spam", Level::SPAM);

    logger.verbose(format_args!("msg"));
    logger.spam(format_args!("noise"));

    assert_eq!(capture.len(), 2);
}

#[test]
fn disabled_verbose_never_formats() {
    let manager = Manager::with_last_resort(None);
    let (logger, capture) = captured(&manager, "props.disabled", Level::INFO);

    logger.verbose(format_args!("msg {}", Exploding));
    verbose!(logger, "msg {}", Exploding);
    spam!(logger, "msg {}", Exploding);

    assert!(capture.is_empty());
}

#[test]
fn level_methods_pass_rank_and_literal_to_emitter() {
    let manager = Manager::with_last_resort(None);
    let logger = VerboseLogger::new_in(&manager, "props.delegate");
    logger.set_level(Level::SPAM);
    let recorder = Arc::new(Recorder::default());
    logger.set_emitter(recorder.clone());

    logger.notice(format_args!("Any random message"));
    logger.verbose(format_args!("Any random message"));
    logger.spam(format_args!("Any random message"));

    let calls = recorder.calls.lock().expect("lock").clone();
    assert_eq!(
        calls,
        [
            (Level::new(25), Some("Any random message")),
            (Level::new(15), Some("Any random message")),
            (Level::new(5), Some("Any random message")),
        ]
    );
}

#[test]
fn success_delegates_at_35() {
    let manager = Manager::with_last_resort(None);
    let logger = VerboseLogger::new_in(&manager, "props.success");
    logger.set_level(Level::SPAM);
    let recorder = Arc::new(Recorder::default());
    logger.set_emitter(recorder.clone());

    success!(logger, "done");

    assert_eq!(
        recorder.calls.lock().expect("lock").as_slice(),
        [(Level::SUCCESS, Some("done"))]
    );
}

#[test]
fn macros_format_arguments_when_enabled() {
    let manager = Manager::with_last_resort(None);
    let (logger, capture) = captured(&manager, "props.macros", Level::SPAM);

    notice!(logger, "{} of {}", 1, 2);

    let records = capture.records();
    assert_eq!(records[0].message, "1 of 2");
    assert_eq!(records[0].level, Level::NOTICE);
    assert!(records[0].has_args());
}

#[test]
fn records_point_at_the_caller() {
    let manager = Manager::with_last_resort(None);
    let (logger, capture) = captured(&manager, "props.location", Level::SPAM);

    let line = line!() + 1;
    logger.notice(format_args!("here"));

    let records = capture.records();
    assert_eq!(records[0].file, file!());
    assert_eq!(records[0].line, line);
}

#[test]
fn records_propagate_to_root_handlers() {
    let manager = Manager::with_last_resort(None);
    let capture = Arc::new(CaptureHandler::new());
    manager.root().add_handler(capture.clone());
    manager.root().set_level(Level::SPAM);

    let logger = VerboseLogger::new_in(&manager, "some.deep.name");
    logger.spam(format_args!("reaches root"));

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "some.deep.name");
}

#[test]
fn disable_threshold_applies_to_custom_levels() {
    let manager = Manager::with_last_resort(None);
    let (logger, capture) = captured(&manager, "props.disable", Level::SPAM);

    manager.disable(Level::NOTICE);
    logger.notice(format_args!("dropped"));
    logger.success(format_args!("kept"));

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "kept");
}
