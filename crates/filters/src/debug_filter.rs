//! Tracing hooks for namespace rule compilation and evaluation.
//!
//! Every helper is compiled behind the `tracing` feature flag and collapses
//! to an inline no-op when the feature is disabled, so the matcher carries no
//! logging cost by default.

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "nsdebug::filter";

/// Traces a rule being added to a filter set.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_rule_added(pattern: &str, is_skip: bool) {
    tracing::debug!(
        target: FILTER_TARGET,
        pattern = %pattern,
        is_skip = is_skip,
        "filter_rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_rule_added(_pattern: &str, _is_skip: bool) {}

/// Traces a token that was discarded because its matcher failed to build.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_rule_dropped(pattern: &str, reason: &str) {
    tracing::warn!(
        target: FILTER_TARGET,
        pattern = %pattern,
        reason = %reason,
        "filter_rule_dropped"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_rule_dropped(_pattern: &str, _reason: &str) {}

/// Traces the decision reached for a namespace.
///
/// `matching_rule` holds the pattern of the deciding rule, or `None` when no
/// rule matched.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_decision(namespace: &str, enabled: bool, matching_rule: Option<&str>) {
    tracing::trace!(
        target: FILTER_TARGET,
        namespace = %namespace,
        enabled = enabled,
        matching_rule = ?matching_rule,
        "filter_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_decision(_namespace: &str, _enabled: bool, _matching_rule: Option<&str>) {}
