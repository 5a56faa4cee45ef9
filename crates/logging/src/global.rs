//! Shortcuts for the process-wide [`Registry::global`] registry.
//!
//! Hosts that want persistence install their own registry with
//! [`Registry::install_global`] before the first call here.

use std::fmt;

use crate::logger::Logger;
use crate::registry::Registry;

/// Creates a logger for `namespace` in the global registry.
///
/// ```
/// let log = logging::logger("app:boot");
/// log.log("starting %s", &["v1".into()]);
/// ```
#[must_use]
pub fn logger(namespace: impl fmt::Display) -> Logger {
    Registry::global().logger(namespace)
}

/// Replaces the global pattern. See [`Registry::enable`].
pub fn enable(namespaces: &str) {
    Registry::global().enable(namespaces);
}

/// Enables every namespace globally. See [`Registry::enable_all`].
pub fn enable_all() {
    Registry::global().enable_all();
}

/// Disables everything globally and returns the previous pattern. See
/// [`Registry::disable`].
pub fn disable() -> String {
    Registry::global().disable()
}

/// Reports whether `namespace` is enabled globally.
#[must_use]
pub fn enabled(namespace: &str) -> bool {
    Registry::global().enabled(namespace)
}
