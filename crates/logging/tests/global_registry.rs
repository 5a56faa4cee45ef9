//! Integration test for installing the process-wide registry.
//!
//! The global registry can be set once per process, so everything lives in a
//! single test in its own binary.

use std::sync::Arc;

use logging::{MemoryStore, RecordCollector, Registry};

#[test]
fn installed_global_registry_persists_free_function_calls() {
    let store = Arc::new(MemoryStore::new());
    let registry = Registry::builder()
        .store(store.clone())
        .hook(RecordCollector::new().hook())
        .build();

    Registry::install_global(Arc::clone(&registry)).expect("nothing used the global yet");
    assert!(Arc::ptr_eq(Registry::global(), &registry));

    logging::enable("svc:*,-svc:poll");
    assert_eq!(store.get().as_deref(), Some("svc:*,-svc:poll"));
    assert!(logging::enabled("svc:http"));
    assert!(!logging::enabled("svc:poll"));

    logging::enable_all();
    assert_eq!(store.get().as_deref(), Some("*"));

    assert_eq!(logging::disable(), "*");
    assert_eq!(store.get(), None);

    let late = Registry::builder().build();
    let rejected = Registry::install_global(Arc::clone(&late)).expect_err("already installed");
    assert!(Arc::ptr_eq(&rejected, &late));
}
