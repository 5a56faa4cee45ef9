//! crates/logging/src/logger.rs
//! Named loggers bound to a [`Registry`].

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::arg::Arg;
use crate::record::{Hook, Record};
use crate::registry::Registry;

/// A debug logger for one namespace.
///
/// A logger is cheap to create and emits nothing unless its namespace is
/// enabled in the registry (or it has been switched on explicitly with
/// [`set_enabled`](Self::set_enabled)). Output goes to the logger's
/// [`Hook`], which starts as the registry's default hook.
///
/// # Examples
///
/// ```
/// use logging::{RecordCollector, Registry};
///
/// let collector = RecordCollector::new();
/// let registry = Registry::builder().hook(collector.hook()).build();
/// let http = registry.logger("http");
///
/// http.log("request %s took %dms", &["/index".into(), 12.into()]);
/// assert!(collector.is_empty());
///
/// registry.enable("http*");
/// let routes = http.extend("routes");
/// routes.log("matched %o", &["/index".into()]);
///
/// let records = collector.drain();
/// assert_eq!(records[0].namespace(), "http:routes");
/// assert_eq!(records[0].message(), r#"matched "/index""#);
/// ```
pub struct Logger {
    namespace: String,
    registry: Arc<Registry>,
    enabled_override: Mutex<Option<bool>>,
    cache: Mutex<Option<(u64, bool)>>,
    hook: RwLock<Hook>,
    color: AtomicU8,
    last_call: Mutex<Option<Instant>>,
}

impl Logger {
    /// Creates a logger for `namespace` in `registry`.
    #[must_use]
    pub fn new(registry: &Arc<Registry>, namespace: impl fmt::Display) -> Self {
        let namespace = namespace.to_string();
        let color = registry.select_color(&namespace);
        Self::with_hook(registry, namespace, registry.default_hook(), color)
    }

    fn with_hook(registry: &Arc<Registry>, namespace: String, hook: Hook, color: u8) -> Self {
        Self {
            namespace,
            registry: Arc::clone(registry),
            enabled_override: Mutex::new(None),
            cache: Mutex::new(None),
            hook: RwLock::new(hook),
            color: AtomicU8::new(color),
            last_call: Mutex::new(None),
        }
    }

    /// The logger's namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The registry this logger consults.
    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Reports whether calls to [`log`](Self::log) currently emit anything.
    ///
    /// An explicit override wins; otherwise the registry's answer is used,
    /// cached until the registry's pattern changes.
    #[must_use]
    pub fn enabled(&self) -> bool {
        if let Some(forced) = *lock(&self.enabled_override) {
            return forced;
        }

        let current = self.registry.generation();
        let mut cache = lock(&self.cache);
        if let Some((generation, enabled)) = *cache {
            if generation == current {
                return enabled;
            }
        }

        let (generation, enabled) = self.registry.evaluate(&self.namespace);
        *cache = Some((generation, enabled));
        enabled
    }

    /// Forces the logger on or off regardless of the registry.
    pub fn set_enabled(&self, enabled: bool) {
        *lock(&self.enabled_override) = Some(enabled);
    }

    /// Drops the override set by [`set_enabled`](Self::set_enabled), so the
    /// registry decides again.
    pub fn clear_enabled_override(&self) {
        *lock(&self.enabled_override) = None;
    }

    /// The override set by [`set_enabled`](Self::set_enabled), if any.
    #[must_use]
    pub fn enabled_override(&self) -> Option<bool> {
        *lock(&self.enabled_override)
    }

    /// The hook records are sent to.
    #[must_use]
    pub fn hook(&self) -> Hook {
        Arc::clone(&self.hook.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces this logger's hook. Loggers previously derived with
    /// [`extend`](Self::extend) keep the old one.
    pub fn set_hook(&self, hook: Hook) {
        *self.hook.write().unwrap_or_else(PoisonError::into_inner) = hook;
    }

    /// Colour code passed along in each [`Record`].
    #[must_use]
    pub fn color(&self) -> u8 {
        self.color.load(Ordering::Relaxed)
    }

    /// Overrides the colour picked from the registry palette.
    pub fn set_color(&self, color: u8) {
        self.color.store(color, Ordering::Relaxed);
    }

    /// Formats and emits a log call.
    ///
    /// Does nothing when the logger is disabled. Otherwise `message` is used
    /// as a template for the registry's [`Formatters`](crate::Formatters);
    /// a message that is not text is rendered as if the template were `%O`.
    /// The record carries the time elapsed since this logger's previous
    /// emitted call.
    pub fn log(&self, message: impl Into<Arg>, args: &[Arg]) {
        if !self.enabled() {
            return;
        }

        let now = Instant::now();
        let elapsed = lock(&self.last_call)
            .replace(now)
            .map_or(Duration::ZERO, |previous| now.saturating_duration_since(previous));

        let formatters = self.registry.formatters();
        let formatted = match message.into() {
            Arg::Str(template) => formatters.apply(&template, args),
            other => {
                let mut all = Vec::with_capacity(args.len() + 1);
                all.push(other);
                all.extend_from_slice(args);
                formatters.apply("%O", &all)
            }
        };

        let record = Record::new(self.namespace.clone(), formatted, elapsed, self.color());
        let hook = self.hook();
        hook(&record);
    }

    /// Creates a child logger named `<namespace>:<suffix>`.
    #[must_use]
    pub fn extend(&self, suffix: impl fmt::Display) -> Self {
        self.extend_with(suffix, ":")
    }

    /// Creates a child logger named `<namespace><delimiter><suffix>`.
    ///
    /// The child shares this logger's hook (the same `Arc`), gets its own
    /// colour and enabled state, and does not inherit an enabled override.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use logging::Registry;
    ///
    /// let registry = Registry::new();
    /// let parent = registry.logger("foo");
    ///
    /// assert_eq!(parent.extend_with("bar", "--").namespace(), "foo--bar");
    /// assert_eq!(parent.extend_with("bar", "").namespace(), "foobar");
    /// assert!(Arc::ptr_eq(&parent.hook(), &parent.extend("bar").hook()));
    /// ```
    #[must_use]
    pub fn extend_with(&self, suffix: impl fmt::Display, delimiter: &str) -> Self {
        let namespace = format!("{}{delimiter}{suffix}", self.namespace);
        let color = self.registry.select_color(&namespace);
        Self::with_hook(&self.registry, namespace, self.hook(), color)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("enabled_override", &self.enabled_override())
            .field("color", &self.color())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests;
