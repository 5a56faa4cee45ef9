#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides namespace-filtered debug loggers. Each [`Logger`] is
//! named by a namespace such as `app:db:pool` and stays silent unless the
//! active pattern of its [`Registry`] enables that namespace. Patterns are
//! comma separated lists of namespaces with `*` wildcards and `-` exclusions,
//! compiled by the [`filters`] crate:
//!
//! ```text
//! DEBUG=app:*,-app:db:pool
//! ```
//!
//! # Design
//!
//! - [`Registry`] owns the compiled [`FilterSet`](filters::FilterSet) and a
//!   generation counter. Loggers hold an `Arc<Registry>` and pull their
//!   enabled state from it, caching the answer per generation, so pattern
//!   changes reach every logger without the registry tracking them.
//! - [`Logger::log`] expands `%` directives with the registry's
//!   [`Formatters`] and passes a [`Record`] to the logger's [`Hook`].
//! - [`StreamSink`] renders records for terminals; [`stderr_hook`] is the
//!   default hook and [`RecordCollector`] keeps records in memory.
//! - [`PatternStore`] persists the active pattern ([`MemoryStore`],
//!   [`FileStore`]); [`DebugConfig`] seeds a registry from `DEBUG` and
//!   `DEBUG_COLORS`.
//! - With the `tracing` feature, [`NamespaceLayer`] routes `tracing` events
//!   through the same namespace filter.
//!
//! # Invariants
//!
//! - A disabled logger never formats its arguments and never calls its hook.
//! - `registry.enable(&registry.disable())` restores an equivalent pattern.
//! - Loggers derived with [`Logger::extend`] share their parent's hook.
//! - Logging never panics or returns an error: failed serialisation is
//!   rendered inline and write or store failures are dropped.
//!
//! # Examples
//!
//! ```
//! use logging::{Arg, RecordCollector, Registry};
//!
//! let collector = RecordCollector::new();
//! let registry = Registry::builder().hook(collector.hook()).build();
//!
//! let pool = registry.logger("app:db").extend("pool");
//! registry.enable("app:*,-app:db:pool");
//! pool.log("checked out %d connections", &[Arg::from(3)]);
//! assert!(collector.is_empty());
//!
//! registry.enable("app:*");
//! pool.log("checked out %d connections", &[Arg::from(3)]);
//! assert_eq!(collector.drain()[0].message(), "checked out 3 connections");
//! ```
//!
//! # See also
//!
//! - [`filters`] for the pattern syntax.
//! - [`duration`] for the elapsed-time rendering used in [`Record::diff`].

mod arg;
mod collector;
mod color;
mod config;
mod formatters;
mod global;
mod line_mode;
mod logger;
mod macros;
mod record;
mod registry;
mod sink;
mod store;
mod trace;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use arg::Arg;
pub use collector::RecordCollector;
pub use color::{DEFAULT_PALETTE, EXTENDED_PALETTE, select_color};
pub use config::{COLORS_VAR, DebugConfig, NAMESPACES_VAR, parse_flag};
pub use formatters::{DirectiveFn, Formatters};
pub use global::{disable, enable, enable_all, enabled, logger};
pub use line_mode::LineMode;
pub use logger::Logger;
pub use record::{Hook, Record};
pub use registry::{Registry, RegistryBuilder};
pub use sink::{StreamSink, render, stderr_hook};
pub use store::{FileStore, MemoryStore, PatternStore, StoreError};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{NamespaceLayer, init_tracing, init_tracing_with_filter};
