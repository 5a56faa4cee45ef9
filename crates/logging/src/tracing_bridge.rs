//! crates/logging/src/tracing_bridge.rs
//! Routes `tracing` events through the namespace filter.
//!
//! [`NamespaceLayer`] is a `tracing-subscriber` layer that turns an event's
//! target into a namespace (`app::db` becomes `app:db`), asks the
//! [`Registry`] whether that namespace is enabled, and if so hands a
//! [`Record`] to the registry's default hook. Code instrumented with the
//! standard `tracing` macros can therefore be switched on and off with the
//! same `DEBUG` patterns as [`Logger`](crate::Logger)s.
//!
//! ```
//! use logging::{NamespaceLayer, RecordCollector, Registry};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let collector = RecordCollector::new();
//! let registry = Registry::builder()
//!     .hook(collector.hook())
//!     .namespaces("app:*")
//!     .build();
//!
//! let subscriber = tracing_subscriber::registry().with(NamespaceLayer::new(registry));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(target: "app::db", rows = 3, "query done");
//!     tracing::info!(target: "other", "dropped");
//! });
//!
//! let records = collector.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].namespace(), "app:db");
//! assert_eq!(records[0].message(), "query done rows=3");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::record::Record;
use crate::registry::Registry;

/// Prefix of the targets this workspace uses for its own diagnostics.
const INTERNAL_TARGET_PREFIX: &str = "nsdebug::";

/// A tracing layer that forwards enabled events to a [`Registry`]'s hook.
pub struct NamespaceLayer {
    registry: Arc<Registry>,
    last_event: Mutex<HashMap<String, Instant>>,
}

impl NamespaceLayer {
    /// Creates a layer bound to `registry`.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            last_event: Mutex::new(HashMap::new()),
        }
    }

    /// Maps a tracing target onto a namespace.
    fn target_to_namespace(target: &str) -> String {
        target.replace("::", ":")
    }

    fn elapsed(&self, namespace: &str, now: Instant) -> Duration {
        let mut last = self.last_event.lock().unwrap_or_else(PoisonError::into_inner);
        last.insert(namespace.to_owned(), now)
            .map_or(Duration::ZERO, |previous| now.saturating_duration_since(previous))
    }
}

impl<S> Layer<S> for NamespaceLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        // Registry and filter diagnostics would otherwise feed back into the
        // registry that produced them.
        if target.starts_with(INTERNAL_TARGET_PREFIX) {
            return;
        }

        let namespace = Self::target_to_namespace(target);
        if !self.registry.enabled(&namespace) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let elapsed = self.elapsed(&namespace, Instant::now());
        let color = self.registry.select_color(&namespace);
        let record = Record::new(namespace, visitor.into_args(), elapsed, color);
        let hook = self.registry.default_hook();
        hook(&record);
    }
}

impl fmt::Debug for NamespaceLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceLayer")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Collects the `message` field and renders the others as `name=value`.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl EventVisitor {
    fn into_args(self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.fields.len() + 1);
        args.push(self.message.unwrap_or_default());
        args.extend(self.fields);
        args
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a global subscriber that routes events through `registry`.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing(registry: Arc<Registry>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(NamespaceLayer::new(registry))
        .try_init()
}

/// Like [`init_tracing`], with an extra layer (usually an
/// `EnvFilter`) applied before the namespace filter.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing_with_filter<F>(registry: Arc<Registry>, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(NamespaceLayer::new(registry))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordCollector;
    use tracing_subscriber::layer::SubscriberExt;

    fn run<F: FnOnce()>(pattern: &str, body: F) -> Vec<Record> {
        let collector = RecordCollector::new();
        let registry = Registry::builder()
            .hook(collector.hook())
            .namespaces(pattern)
            .build();
        let subscriber = tracing_subscriber::registry().with(NamespaceLayer::new(registry));
        tracing::subscriber::with_default(subscriber, body);
        collector.drain()
    }

    #[test]
    fn target_separators_become_colons() {
        assert_eq!(NamespaceLayer::target_to_namespace("app::net::tcp"), "app:net:tcp");
        assert_eq!(NamespaceLayer::target_to_namespace("plain"), "plain");
    }

    #[test]
    fn enabled_targets_reach_the_hook() {
        let records = run("svc:*,-svc:noisy", || {
            tracing::debug!(target: "svc::auth", user = "ada", "login");
            tracing::debug!(target: "svc::noisy", "suppressed");
            tracing::warn!(target: "elsewhere", "suppressed");
        });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].args(), ["login", "user=ada"]);
    }

    #[test]
    fn repeated_events_measure_elapsed_time() {
        let records = run("*", || {
            tracing::info!(target: "tick", "one");
            std::thread::sleep(Duration::from_millis(10));
            tracing::info!(target: "tick", "two");
        });

        assert_eq!(records[0].elapsed(), Duration::ZERO);
        assert!(records[1].elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn internal_targets_are_ignored() {
        let records = run("*", || {
            tracing::info!(target: "nsdebug::registry", "internal");
        });
        assert!(records.is_empty());
    }
}
