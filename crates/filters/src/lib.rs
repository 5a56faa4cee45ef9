#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` compiles namespace pattern strings such as `"app:*,-app:noisy"`
//! into matchers and decides whether a given namespace is enabled.
//!
//! # Design
//!
//! - [`FilterRule`] captures the action ([`FilterAction::Allow`] or
//!   [`FilterAction::Skip`]) and the pattern text without its `-` marker.
//! - [`FilterSet`] owns the compiled form of each rule. Patterns without
//!   wildcards are compared directly, the lone `*` short-circuits, and any
//!   other wildcard pattern becomes an anchored regular expression in which
//!   only `*` is special.
//! - Rules are stored once, in source order; the allow and skip views are
//!   filters over that list. This keeps reconstruction of the pattern string
//!   exact.
//!
//! # Invariants
//!
//! - A namespace is enabled iff some allow rule matches and no skip rule
//!   matches.
//! - A set without allow rules enables nothing, whatever its skip rules say.
//! - `FilterSet::parse(&set.to_pattern_string()) == set`.
//!
//! # Errors
//!
//! [`FilterSet::parse`] never fails; tokens that cannot be compiled are
//! dropped. [`FilterSet::from_rules`] is strict and reports [`FilterError`]
//! with the offending pattern, either because the pattern cannot be compiled
//! (carrying the underlying [`regex::Error`]) or because the rule could not be
//! written back as a pattern string.
//!
//! # Examples
//!
//! ```
//! use filters::{Decision, FilterRule, FilterSet};
//!
//! let set = FilterSet::parse("worker:*,-worker:heartbeat");
//!
//! assert!(set.allows("worker:queue"));
//! assert!(!set.allows("worker:heartbeat"));
//! assert_eq!(
//!     set.decide("worker:heartbeat"),
//!     Decision::Skipped(&FilterRule::skip("worker:heartbeat"))
//! );
//! assert_eq!(set.decide("http"), Decision::Unmatched);
//! ```

mod action;
mod compiled;
pub mod debug_filter;
mod decision;
mod error;
mod rule;
mod set;

pub use action::FilterAction;
pub use decision::Decision;
pub use error::FilterError;
pub use rule::FilterRule;
pub use set::{FilterSet, split_tokens};
