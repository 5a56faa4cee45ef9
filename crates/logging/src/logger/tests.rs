use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::{Arg, RecordCollector, Registry};

fn setup(pattern: &str) -> (Arc<Registry>, RecordCollector) {
    let collector = RecordCollector::new();
    let registry = Registry::builder()
        .hook(collector.hook())
        .namespaces(pattern)
        .build();
    (registry, collector)
}

#[test]
fn disabled_logger_never_calls_hook() {
    let (registry, collector) = setup("");
    let logger = registry.logger("quiet");
    logger.log("hello %s", &[Arg::from("world")]);
    assert!(collector.is_empty());
}

#[test]
fn existing_loggers_follow_pattern_changes() {
    let (registry, _collector) = setup("");
    let logger = registry.logger("test:12345");
    let other = registry.logger("test:67890");
    assert!(!logger.enabled());

    registry.enable("test:12345");
    assert!(logger.enabled());
    assert!(!other.enabled());

    let _ = registry.disable();
    assert!(!logger.enabled());
}

#[test]
fn loggers_created_later_see_current_state() {
    let (registry, _collector) = setup("late:*");
    assert!(registry.logger("late:one").enabled());
}

#[test]
fn override_wins_until_cleared() {
    let (registry, collector) = setup("");
    let logger = registry.logger("forced");

    logger.set_enabled(true);
    assert_eq!(logger.enabled_override(), Some(true));
    logger.log("emitted", &[]);
    assert_eq!(collector.len(), 1);

    registry.enable("*");
    logger.set_enabled(false);
    assert!(!logger.enabled());

    logger.clear_enabled_override();
    assert!(logger.enabled());
}

#[test]
fn custom_hook_receives_each_call() {
    let (registry, _default) = setup("*");
    let logger = registry.logger("hooked");
    let own = RecordCollector::new();
    logger.set_hook(own.hook());

    logger.log("one", &[]);
    logger.log("two", &[]);
    logger.log("three", &[]);

    let messages: Vec<_> = own.drain().iter().map(crate::Record::message).collect();
    assert_eq!(messages, ["one", "two", "three"]);
}

#[test]
fn record_carries_formatted_arguments() {
    let (registry, collector) = setup("*");
    let logger = registry.logger("fmt");
    logger.log(
        "%s=%d %j",
        &[Arg::from("count"), Arg::from(3), Arg::json(&[1, 2]), Arg::from("extra")],
    );

    let record = &collector.drain()[0];
    assert_eq!(record.namespace(), "fmt");
    assert_eq!(record.args(), ["count=3 [1,2]", "extra"]);
    assert_eq!(record.color(), logger.color());
}

#[test]
fn non_text_message_is_inspected() {
    let (registry, collector) = setup("*");
    registry.logger("obj").log(Arg::inspect(&Some(5)), &[Arg::from("tail")]);
    assert_eq!(collector.drain()[0].args(), ["Some(\n    5,\n)", "tail"]);

    registry.logger("num").log(42, &[]);
    assert_eq!(collector.drain()[0].message(), "42");
}

#[test]
fn elapsed_time_is_measured_between_calls() {
    let (registry, collector) = setup("*");
    let logger = registry.logger("timer");

    logger.log("first", &[]);
    thread::sleep(Duration::from_millis(20));
    logger.log("second", &[]);

    let records = collector.drain();
    assert_eq!(records[0].elapsed(), Duration::ZERO);
    assert!(records[1].elapsed() >= Duration::from_millis(20));
}

#[test]
fn extend_builds_child_namespaces() {
    let (registry, _collector) = setup("");
    let parent = registry.logger("foo");

    assert_eq!(parent.extend("bar").namespace(), "foo:bar");
    assert_eq!(parent.extend_with("bar", "--").namespace(), "foo--bar");
    assert_eq!(parent.extend_with("bar", "").namespace(), "foobar");
}

#[test]
fn extend_shares_hook_and_recomputes_enabled() {
    let (registry, _collector) = setup("foo:*");
    let parent = registry.logger("foo");
    parent.set_enabled(true);

    let child = parent.extend("bar");
    assert!(Arc::ptr_eq(&parent.hook(), &child.hook()));
    assert_eq!(child.enabled_override(), None);
    assert!(child.enabled());
    assert_eq!(child.color(), registry.select_color("foo:bar"));
}

#[test]
fn namespace_accepts_display_values() {
    let (registry, _collector) = setup("");
    assert_eq!(registry.logger(12345).namespace(), "12345");
    assert_eq!(registry.logger('x').namespace(), "x");
    assert_eq!(registry.logger("n").extend(7).namespace(), "n:7");
}

#[test]
fn colour_can_be_overridden() {
    let (registry, _collector) = setup("");
    let logger = registry.logger("paint");
    assert_eq!(logger.color(), registry.select_color("paint"));
    logger.set_color(200);
    assert_eq!(logger.color(), 200);
}

#[test]
fn loggers_work_across_threads() {
    let (registry, collector) = setup("worker:*");
    let handles: Vec<_> = (0..4)
        .map(|index| {
            let logger = registry.logger(format!("worker:{index}"));
            thread::spawn(move || {
                for _ in 0..10 {
                    logger.log("tick", &[]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread");
    }
    assert_eq!(collector.len(), 40);
}
