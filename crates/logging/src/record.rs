//! crates/logging/src/record.rs
//! The value handed to output hooks.

use std::sync::Arc;
use std::time::Duration;

use duration::{FormatOptions, format_std};

/// Output hook invoked once per emitted log call.
///
/// Hooks are shared by reference count: a child logger created with
/// [`Logger::extend`](crate::Logger::extend) holds the same `Arc` as its
/// parent.
pub type Hook = Arc<dyn Fn(&Record) + Send + Sync>;

/// A formatted log call.
///
/// `args` holds the message produced from the template followed by any
/// arguments that no directive consumed, each already rendered to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    namespace: String,
    args: Vec<String>,
    elapsed: Duration,
    color: u8,
}

impl Record {
    /// Creates a record.
    #[must_use]
    pub fn new(namespace: impl Into<String>, args: Vec<String>, elapsed: Duration, color: u8) -> Self {
        Self {
            namespace: namespace.into(),
            args,
            elapsed,
            color,
        }
    }

    /// Namespace of the logger that produced the record.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Formatted message followed by the unconsumed arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Time since the previous emitted call of the same logger, zero for the
    /// first call.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Colour code assigned to the logger.
    #[must_use]
    pub const fn color(&self) -> u8 {
        self.color
    }

    /// All arguments joined with single spaces.
    #[must_use]
    pub fn message(&self) -> String {
        self.args.join(" ")
    }

    /// Elapsed time in the short duration form, e.g. `12ms` or `3s`.
    #[must_use]
    pub fn diff(&self) -> String {
        format_std(self.elapsed, FormatOptions::short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_joins_arguments() {
        let record = Record::new(
            "app:db",
            vec!["connected".into(), "3".into()],
            Duration::from_millis(1_500),
            4,
        );
        assert_eq!(record.namespace(), "app:db");
        assert_eq!(record.message(), "connected 3");
        assert_eq!(record.diff(), "2s");
        assert_eq!(record.color(), 4);
    }

    #[test]
    fn first_call_has_zero_diff() {
        let record = Record::new("x", vec![String::new()], Duration::ZERO, 1);
        assert_eq!(record.diff(), "0ms");
    }
}
