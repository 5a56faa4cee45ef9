#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

pub use duration;
pub use filters;
pub use logging;

pub use logging::{
    Arg, DebugConfig, FileStore, Formatters, Hook, Logger, MemoryStore, PatternStore, Record,
    RecordCollector, Registry, StreamSink, debug_log, disable, enable, enable_all, enabled, logger,
    stderr_hook,
};

#[cfg(feature = "tracing")]
pub use logging::{NamespaceLayer, init_tracing};
