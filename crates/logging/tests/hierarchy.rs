//! Parent inference and propagation through the manager.

use std::sync::Arc;

use levels::Level;
use logging::{CaptureHandler, Handler, Manager, Record};

fn parent_name(manager: &Manager, name: &str) -> String {
    manager
        .get_logger(name)
        .parent()
        .map(|parent| parent.name().to_owned())
        .unwrap_or_default()
}

#[test]
fn creation_order_does_not_change_the_tree() {
    let forward = Manager::with_last_resort(None);
    for name in ["a", "a.b", "a.b.c", "a.x.y"] {
        forward.get_logger(name);
    }

    let backward = Manager::with_last_resort(None);
    for name in ["a.x.y", "a.b.c", "a.b", "a"] {
        backward.get_logger(name);
    }

    for name in ["a", "a.b", "a.b.c", "a.x.y"] {
        assert_eq!(
            parent_name(&forward, name),
            parent_name(&backward, name),
            "{name}"
        );
    }
    assert_eq!(parent_name(&backward, "a.x.y"), "a");
    assert_eq!(parent_name(&backward, "a.b.c"), "a.b");
    assert_eq!(parent_name(&backward, "a"), "root");
}

#[test]
fn propagation_stops_at_non_propagating_logger() {
    let manager = Manager::with_last_resort(None);
    let root_capture = Arc::new(CaptureHandler::new());
    let mid_capture = Arc::new(CaptureHandler::new());
    manager.root().add_handler(root_capture.clone());
    manager.root().set_level(Level::DEBUG);

    let mid = manager.get_logger("svc");
    mid.add_handler(mid_capture.clone());
    mid.set_propagate(false);

    manager.get_logger("svc.worker").info(format_args!("hello"));

    assert_eq!(mid_capture.len(), 1);
    assert!(root_capture.is_empty());
}

#[test]
fn handler_level_filters_independently() {
    let manager = Manager::with_last_resort(None);
    let everything = Arc::new(CaptureHandler::new());
    let errors_only = Arc::new(CaptureHandler::with_level(Level::ERROR));
    let root = manager.root();
    root.set_level(Level::DEBUG);
    root.add_handler(everything.clone());
    root.add_handler(errors_only.clone());

    let app = manager.get_logger("app");
    app.warning(format_args!("w"));
    app.error(format_args!("e"));

    assert_eq!(everything.len(), 2);
    assert_eq!(errors_only.len(), 1);
    assert_eq!(errors_only.records()[0].message, "e");
}

struct Counting(Arc<CaptureHandler>);

impl Handler for Counting {
    fn level(&self) -> Level {
        Level::NOTSET
    }

    fn handle(&self, record: &Record) {
        self.0.handle(record);
    }
}

#[test]
fn last_resort_only_when_no_handler_exists() {
    let sink = Arc::new(CaptureHandler::new());
    let manager = Manager::with_last_resort(Some(Arc::new(Counting(sink.clone()))));
    let app = manager.get_logger("app");

    app.warning(format_args!("fallback"));
    assert_eq!(sink.len(), 1);

    let capture = Arc::new(CaptureHandler::new());
    app.add_handler(capture.clone());
    app.warning(format_args!("handled"));
    assert_eq!(sink.len(), 1);
    assert_eq!(capture.len(), 1);
}

#[test]
fn get_logger_is_stable_across_threads() {
    let manager = Arc::new(Manager::with_last_resort(None));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            std::thread::spawn(move || manager.get_logger("shared.name"))
        })
        .collect();

    let loggers: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread"))
        .collect();
    assert!(loggers.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}
