//! Tracing hooks for registry state changes.
//!
//! Compiled behind the `tracing` feature; each helper is an inline no-op
//! otherwise.

#[cfg(feature = "tracing")]
use crate::store::StoreError;

/// Target name for tracing events emitted by the registry.
#[cfg(feature = "tracing")]
pub(crate) const REGISTRY_TARGET: &str = "nsdebug::registry";

/// Traces a new pattern string taking effect.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_pattern_applied(namespaces: &str, rules: usize, generation: u64) {
    tracing::debug!(
        target: REGISTRY_TARGET,
        namespaces = %namespaces,
        rules = rules,
        generation = generation,
        "pattern_applied"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_pattern_applied(_namespaces: &str, _rules: usize, _generation: u64) {}

/// Traces a pattern being loaded from the persistence store at start-up.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_pattern_restored(namespaces: &str) {
    tracing::debug!(
        target: REGISTRY_TARGET,
        namespaces = %namespaces,
        "pattern_restored"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_pattern_restored(_namespaces: &str) {}

/// Traces a persistence failure that was swallowed.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_store_failed(operation: &'static str, error: &StoreError) {
    tracing::warn!(
        target: REGISTRY_TARGET,
        operation = operation,
        error = %error,
        "pattern_store_failed"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_store_failed(_operation: &'static str, _error: &crate::store::StoreError) {}
