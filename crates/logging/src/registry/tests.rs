use std::sync::Arc;

use super::*;
use crate::{MemoryStore, RecordCollector};

fn quiet() -> Arc<Registry> {
    Registry::builder().hook(RecordCollector::new().hook()).build()
}

#[test]
fn starts_with_nothing_enabled() {
    let registry = quiet();
    assert!(!registry.enabled("anything"));
    assert_eq!(registry.namespaces(), "");
    assert!(registry.filters().is_empty());
}

#[test]
fn enable_applies_to_queries() {
    let registry = quiet();
    assert!(!registry.enabled("test:12345"));

    registry.enable("test:12345");
    assert!(registry.enabled("test:12345"));
    assert!(!registry.enabled("test:67890"));
}

#[test]
fn enable_all_matches_everything() {
    let registry = quiet();
    registry.enable_all();
    assert!(registry.enabled("a"));
    assert!(registry.enabled("a:b:c"));
    assert_eq!(registry.disable(), "*");
}

#[test]
fn disable_returns_reconstructed_pattern() {
    let registry = quiet();

    registry.enable("*");
    assert_eq!(registry.disable(), "*");

    registry.enable("-*");
    assert_eq!(registry.disable(), "-*");

    registry.enable("");
    assert_eq!(registry.disable(), "");
    assert_eq!(registry.filters().allow_rules().count(), 0);
    assert_eq!(registry.filters().skip_rules().count(), 0);
}

#[test]
fn disable_then_enable_restores_state() {
    let registry = quiet();
    registry.enable("test,abc*,-abc");
    let before = registry.filters();

    let pattern = registry.disable();
    assert!(!registry.enabled("test"));

    registry.enable(&pattern);
    assert_eq!(registry.filters(), before);
}

#[test]
fn generation_advances_on_every_change() {
    let registry = quiet();
    let start = registry.generation();
    registry.enable("a");
    registry.enable("a");
    let _ = registry.disable();
    assert_eq!(registry.generation(), start + 3);
}

#[test]
fn enable_persists_raw_pattern() {
    let store = Arc::new(MemoryStore::new());
    let registry = Registry::builder()
        .store(store.clone())
        .hook(RecordCollector::new().hook())
        .build();

    registry.enable(" a, -b ");
    assert_eq!(store.get().as_deref(), Some(" a, -b "));

    let _ = registry.disable();
    assert_eq!(store.get(), None);
}

#[test]
fn concurrent_enables_leave_store_matching_live_pattern() {
    let store = Arc::new(MemoryStore::new());
    let registry = Registry::builder()
        .store(store.clone())
        .hook(RecordCollector::new().hook())
        .build();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let registry = &registry;
            scope.spawn(move || {
                for round in 0..50 {
                    registry.enable(&format!("w{worker}:r{round}"));
                }
            });
        }
    });

    assert_eq!(store.get(), Some(registry.namespaces()));
}

#[test]
fn builder_seeds_from_store_without_saving() {
    struct CountingStore {
        inner: MemoryStore,
        saves: std::sync::atomic::AtomicUsize,
    }

    impl PatternStore for CountingStore {
        fn save(&self, namespaces: &str) -> Result<(), StoreError> {
            self.saves.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.inner.save(namespaces)
        }

        fn load(&self) -> Result<Option<String>, StoreError> {
            self.inner.load()
        }
    }

    let store = Arc::new(CountingStore {
        inner: MemoryStore::with_value("db:*"),
        saves: std::sync::atomic::AtomicUsize::new(0),
    });
    let registry = Registry::builder().store(store.clone()).build();

    assert!(registry.enabled("db:query"));
    assert_eq!(store.saves.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn explicit_namespaces_beat_the_store() {
    let registry = Registry::builder()
        .store(Arc::new(MemoryStore::with_value("from-store")))
        .namespaces("from-builder")
        .build();
    assert!(registry.enabled("from-builder"));
    assert!(!registry.enabled("from-store"));
}

struct FailingStore;

impl PatternStore for FailingStore {
    fn save(&self, _: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".into()))
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("read-only".into()))
    }
}

#[test]
fn store_failures_are_swallowed() {
    let registry = Registry::builder().store(Arc::new(FailingStore)).build();
    registry.enable("x");
    assert!(registry.enabled("x"));
    assert_eq!(registry.disable(), "x");
}

#[test]
fn restore_reports_store_errors() {
    let registry = Registry::builder().store(Arc::new(FailingStore)).build();
    assert!(matches!(registry.restore(), Err(StoreError::Unavailable(_))));
}

#[test]
fn restore_without_store_is_a_no_op() {
    let registry = quiet();
    registry.enable("keep");
    assert_eq!(registry.restore().expect("no store"), None);
    assert!(registry.enabled("keep"));
}

#[test]
fn from_config_applies_pattern_and_palette() {
    let config = DebugConfig::default()
        .with_namespaces("svc:*")
        .with_palette([42]);
    let registry = Registry::from_config(&config);

    assert!(registry.enabled("svc:auth"));
    assert_eq!(registry.palette(), [42]);
    assert_eq!(registry.select_color("anything"), 42);
}

#[test]
fn default_hook_applies_to_new_loggers_only() {
    let first = RecordCollector::new();
    let second = RecordCollector::new();
    let registry = Registry::builder().hook(first.hook()).namespaces("*").build();

    let early = registry.logger("early");
    registry.set_default_hook(second.hook());
    let late = registry.logger("late");

    early.log("one", &[]);
    late.log("two", &[]);

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn debug_output_shows_pattern() {
    let registry = quiet();
    registry.enable("a,-b");
    let debug = format!("{registry:?}");
    assert!(debug.contains("a,-b"));
}
