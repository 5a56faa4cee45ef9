//! crates/logging/src/registry.rs
//! Shared enable/disable state consulted by every logger.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use filters::FilterSet;

use crate::arg::Arg;
use crate::color::{DEFAULT_PALETTE, select_color};
use crate::config::DebugConfig;
use crate::formatters::Formatters;
use crate::logger::Logger;
use crate::record::Hook;
use crate::sink::stderr_hook;
use crate::store::{PatternStore, StoreError};
use crate::trace::{trace_pattern_applied, trace_pattern_restored, trace_store_failed};

#[derive(Debug, Default)]
struct State {
    filters: FilterSet,
    generation: u64,
}

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// Holds the active namespace pattern and the defaults handed to new loggers.
///
/// Loggers keep an `Arc<Registry>` and ask it whether their namespace is
/// enabled. Every [`enable`](Self::enable) or [`disable`](Self::disable)
/// bumps a generation counter; loggers cache their answer per generation, so
/// a pattern change is visible to every existing logger as soon as the call
/// returns while repeated checks stay cheap.
///
/// # Examples
///
/// ```
/// use logging::Registry;
///
/// let registry = Registry::new();
/// let worker = registry.logger("worker:1");
/// assert!(!worker.enabled());
///
/// registry.enable("worker:*,-worker:2");
/// assert!(worker.enabled());
/// assert!(!registry.enabled("worker:2"));
///
/// assert_eq!(registry.disable(), "worker:*,-worker:2");
/// assert!(!worker.enabled());
/// ```
pub struct Registry {
    state: RwLock<State>,
    store: Option<Arc<dyn PatternStore>>,
    default_hook: RwLock<Hook>,
    formatters: RwLock<Arc<Formatters>>,
    palette: Vec<u8>,
}

impl Registry {
    /// Creates a registry with nothing enabled, no persistence store and
    /// uncoloured output to standard error.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Self::builder().build()
    }

    /// Starts configuring a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Creates a registry seeded from `config`.
    #[must_use]
    pub fn from_config(config: &DebugConfig) -> Arc<Self> {
        let mut builder = Self::builder()
            .colors(config.colors)
            .palette(config.palette.clone());
        if let Some(namespaces) = &config.namespaces {
            builder = builder.namespaces(namespaces.clone());
        }
        builder.build()
    }

    /// Process-wide registry.
    ///
    /// The registry handed to [`install_global`](Self::install_global) if
    /// one was installed first, otherwise one created on first use from
    /// [`DebugConfig::from_env`].
    pub fn global() -> &'static Arc<Self> {
        GLOBAL.get_or_init(|| Self::from_config(&DebugConfig::from_env()))
    }

    /// Installs `registry` as the process-wide registry, typically one built
    /// with a persistence [`store`](RegistryBuilder::store).
    ///
    /// # Errors
    ///
    /// The global registry is fixed once set or first used; if that already
    /// happened, `registry` is handed back unchanged.
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use logging::{FileStore, Registry};
    ///
    /// let registry = Registry::builder()
    ///     .store(Arc::new(FileStore::new("/tmp/debug-pattern")))
    ///     .build();
    /// Registry::install_global(registry).expect("first use");
    /// logging::enable("app:*");
    /// ```
    pub fn install_global(registry: Arc<Self>) -> Result<(), Arc<Self>> {
        GLOBAL.set(registry)
    }

    /// Replaces the active pattern with `namespaces`.
    ///
    /// The string is compiled with [`FilterSet::parse`], so malformed tokens
    /// never fail the call. The raw string is handed to the persistence
    /// store, if any; store failures are traced and otherwise ignored.
    ///
    /// The store is written while the state lock is held, so concurrent
    /// calls leave the store holding the pattern that ends up active.
    pub fn enable(&self, namespaces: &str) {
        let filters = FilterSet::parse(namespaces);
        let rules = filters.len();
        let generation = {
            let mut state = self.write_state();
            state.filters = filters;
            state.generation += 1;
            self.persist(namespaces);
            state.generation
        };
        trace_pattern_applied(namespaces, rules, generation);
    }

    /// Enables every namespace; shorthand for `enable("*")`.
    pub fn enable_all(&self) {
        self.enable("*");
    }

    /// Disables everything and returns the pattern that was active.
    ///
    /// The returned string is rebuilt from the compiled rules, so passing it
    /// back to [`enable`](Self::enable) restores an equivalent state.
    pub fn disable(&self) -> String {
        let (previous, generation) = {
            let mut state = self.write_state();
            let previous = state.filters.to_pattern_string();
            state.filters = FilterSet::default();
            state.generation += 1;
            self.persist("");
            (previous, state.generation)
        };
        trace_pattern_applied("", 0, generation);
        previous
    }

    /// Reports whether `namespace` is enabled by the active pattern.
    #[must_use]
    pub fn enabled(&self, namespace: &str) -> bool {
        self.read_state().filters.allows(namespace)
    }

    /// Evaluates `namespace` and returns the answer together with the
    /// generation it belongs to.
    pub(crate) fn evaluate(&self, namespace: &str) -> (u64, bool) {
        let state = self.read_state();
        (state.generation, state.filters.allows(namespace))
    }

    /// Rebuilds the active pattern string without changing anything.
    #[must_use]
    pub fn namespaces(&self) -> String {
        self.read_state().filters.to_pattern_string()
    }

    /// Returns a snapshot of the active rules.
    #[must_use]
    pub fn filters(&self) -> FilterSet {
        self.read_state().filters.clone()
    }

    /// Counter bumped by every pattern change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.read_state().generation
    }

    /// Re-reads the persistence store and applies what it holds.
    ///
    /// Nothing is written back to the store. Returns the loaded pattern, or
    /// `None` when the registry has no store or the store is empty (in which
    /// case the active pattern is left alone).
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged.
    pub fn restore(&self) -> Result<Option<String>, StoreError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let loaded = store.load()?;
        if let Some(namespaces) = &loaded {
            trace_pattern_restored(namespaces);
            let filters = FilterSet::parse(namespaces);
            let rules = filters.len();
            let generation = self.replace(filters);
            trace_pattern_applied(namespaces, rules, generation);
        }
        Ok(loaded)
    }

    /// Hook given to loggers created from now on.
    #[must_use]
    pub fn default_hook(&self) -> Hook {
        Arc::clone(&self.default_hook.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the hook given to loggers created from now on. Existing
    /// loggers keep theirs.
    pub fn set_default_hook(&self, hook: Hook) {
        *self.default_hook.write().unwrap_or_else(PoisonError::into_inner) = hook;
    }

    /// Directive table used by every logger of this registry.
    #[must_use]
    pub fn formatters(&self) -> Arc<Formatters> {
        Arc::clone(&self.formatters.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Binds `directive` for every logger of this registry.
    ///
    /// ```
    /// use logging::{RecordCollector, Registry};
    ///
    /// let collector = RecordCollector::new();
    /// let registry = Registry::builder().hook(collector.hook()).build();
    /// registry.register_formatter('u', |arg| arg.to_string().to_uppercase());
    /// registry.enable_all();
    ///
    /// registry.logger("x").log("%u!", &["hey".into()]);
    /// assert_eq!(collector.drain()[0].message(), "HEY!");
    /// ```
    pub fn register_formatter<F>(&self, directive: char, formatter: F)
    where
        F: Fn(&Arg) -> String + Send + Sync + 'static,
    {
        let mut formatters = self.formatters.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut formatters).register(directive, formatter);
    }

    /// Colours namespaces are drawn from.
    #[must_use]
    pub fn palette(&self) -> &[u8] {
        &self.palette
    }

    /// Colour a logger for `namespace` receives.
    #[must_use]
    pub fn select_color(&self, namespace: &str) -> u8 {
        select_color(namespace, &self.palette)
    }

    /// Creates a logger for `namespace`.
    ///
    /// Any [`Display`](fmt::Display) value is accepted as a namespace.
    #[must_use]
    pub fn logger(self: &Arc<Self>, namespace: impl fmt::Display) -> Logger {
        Logger::new(self, namespace)
    }

    fn replace(&self, filters: FilterSet) -> u64 {
        let mut state = self.write_state();
        state.filters = filters;
        state.generation += 1;
        state.generation
    }

    // Called with the state write lock held.
    fn persist(&self, namespaces: &str) {
        if let Some(store) = &self.store {
            if let Err(error) = store.save(namespaces) {
                trace_store_failed("save", &error);
            }
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("Registry")
            .field("namespaces", &state.filters.to_pattern_string())
            .field("generation", &state.generation)
            .field("has_store", &self.store.is_some())
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

/// Configures a [`Registry`] before it is shared.
///
/// ```
/// use std::sync::Arc;
/// use logging::{MemoryStore, PatternStore, Registry};
///
/// let store = Arc::new(MemoryStore::with_value("cache:*"));
/// let registry = Registry::builder()
///     .store(store.clone())
///     .palette([1, 2, 3])
///     .build();
///
/// assert!(registry.enabled("cache:hit"));
/// registry.enable("db");
/// assert_eq!(store.load().unwrap().as_deref(), Some("db"));
/// ```
#[must_use]
pub struct RegistryBuilder {
    store: Option<Arc<dyn PatternStore>>,
    hook: Option<Hook>,
    colors: bool,
    palette: Vec<u8>,
    formatters: Formatters,
    namespaces: Option<String>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            store: None,
            hook: None,
            colors: false,
            palette: DEFAULT_PALETTE.to_vec(),
            formatters: Formatters::default(),
            namespaces: None,
        }
    }
}

impl RegistryBuilder {
    /// Persists pattern changes to `store`, and seeds the initial pattern
    /// from it unless [`namespaces`](Self::namespaces) is also given.
    pub fn store(mut self, store: Arc<dyn PatternStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Default output hook for new loggers. Overrides
    /// [`colors`](Self::colors).
    pub fn hook(mut self, hook: Hook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Whether the standard error hook renders colours. Ignored when a hook
    /// is supplied.
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Colours assigned to namespaces.
    pub fn palette(mut self, palette: impl Into<Vec<u8>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Directive table shared by every logger.
    pub fn formatters(mut self, formatters: Formatters) -> Self {
        self.formatters = formatters;
        self
    }

    /// Initial pattern string.
    pub fn namespaces(mut self, namespaces: impl Into<String>) -> Self {
        self.namespaces = Some(namespaces.into());
        self
    }

    /// Builds the registry.
    ///
    /// The initial pattern is applied without being written to the store. A
    /// store that fails to load leaves the registry empty; the failure is
    /// traced.
    #[must_use]
    pub fn build(self) -> Arc<Registry> {
        let hook = self.hook.unwrap_or_else(|| stderr_hook(self.colors));
        let registry = Registry {
            state: RwLock::new(State::default()),
            store: self.store,
            default_hook: RwLock::new(hook),
            formatters: RwLock::new(Arc::new(self.formatters)),
            palette: self.palette,
        };

        if let Some(namespaces) = self.namespaces {
            let filters = FilterSet::parse(&namespaces);
            let rules = filters.len();
            let generation = registry.replace(filters);
            trace_pattern_applied(&namespaces, rules, generation);
        } else if let Err(error) = registry.restore() {
            trace_store_failed("load", &error);
        }

        Arc::new(registry)
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("has_store", &self.store.is_some())
            .field("has_hook", &self.hook.is_some())
            .field("colors", &self.colors)
            .field("palette", &self.palette)
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
