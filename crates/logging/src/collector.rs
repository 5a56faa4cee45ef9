//! crates/logging/src/collector.rs
//! In-memory hook that keeps emitted records.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::record::{Hook, Record};

/// Collects records emitted through its [`hook`](Self::hook).
///
/// Clones share the same buffer, so a collector can be handed to a registry
/// builder while the caller keeps a handle for inspection.
///
/// ```
/// use logging::{Registry, RecordCollector};
///
/// let collector = RecordCollector::new();
/// let registry = Registry::builder().hook(collector.hook()).build();
/// registry.enable("jobs:*");
///
/// registry.logger("jobs:import").log("started %s", &["batch-7".into()]);
/// registry.logger("web").log("ignored", &[]);
///
/// let records = collector.drain();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message(), "started batch-7");
/// assert!(collector.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordCollector {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a hook that appends every record to this collector.
    #[must_use]
    pub fn hook(&self) -> Hook {
        let records = Arc::clone(&self.records);
        Arc::new(move |record: &Record| {
            records
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(record.clone());
        })
    }

    /// Removes and returns every collected record.
    #[must_use]
    pub fn drain(&self) -> Vec<Record> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns copies of the collected records without removing them.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
