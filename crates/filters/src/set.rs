use std::fmt;
use std::sync::Arc;

use crate::{
    FilterError, FilterRule,
    compiled::CompiledRule,
    debug_filter::{trace_filter_decision, trace_filter_rule_added, trace_filter_rule_dropped},
    decision::{Decision, FilterSetInner},
};

/// Compiled, immutable collection of namespace rules.
///
/// A `FilterSet` is usually built from a pattern string via
/// [`parse`](Self::parse): a comma or whitespace separated list of tokens
/// where a leading `-` turns the token into a skip rule and `*` matches any
/// run of characters, delimiters included.
///
/// A namespace is enabled when at least one allow rule matches it and no skip
/// rule does. Skip rules always win, and a set without allow rules enables
/// nothing.
///
/// Rules keep the order they were written in, so the original pattern string
/// can be rebuilt with [`to_pattern_string`](Self::to_pattern_string).
///
/// `FilterSet` is cheaply cloneable (the inner state is behind an [`Arc`]).
///
/// # Examples
///
/// ```
/// use filters::FilterSet;
///
/// let set = FilterSet::parse("test,abc*,-abc");
///
/// assert!(set.allows("test"));
/// assert!(set.allows("abcd"));
/// assert!(!set.allows("abc"));
/// assert!(!set.allows("other"));
/// assert_eq!(set.to_pattern_string(), "test,abc*,-abc");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    inner: Arc<FilterSetInner>,
}

impl FilterSet {
    /// Compiles a pattern string.
    ///
    /// Tokens are separated by `,` or whitespace; empty tokens are ignored.
    /// Compilation never fails: a token whose matcher cannot be built is
    /// dropped, leaving fewer namespaces enabled.
    #[must_use]
    pub fn parse(patterns: &str) -> Self {
        let rules = split_tokens(patterns)
            .map(FilterRule::from_token)
            .filter_map(|rule| match CompiledRule::new(rule) {
                Ok(compiled) => {
                    trace_filter_rule_added(compiled.rule.pattern(), compiled.rule.is_skip());
                    Some(compiled)
                }
                Err(error) => {
                    trace_filter_rule_dropped(error.pattern(), &error.to_string());
                    None
                }
            })
            .collect();

        Self::from_compiled(rules)
    }

    /// Builds a [`FilterSet`] from explicit rules, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Unrepresentable`] for a rule that would not
    /// survive [`to_pattern_string`](Self::to_pattern_string) followed by
    /// [`parse`](Self::parse) (see [`FilterRule::is_representable`]), and
    /// [`FilterError::Compile`] if a rule's pattern cannot be compiled.
    pub fn from_rules<I>(rules: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = FilterRule>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| {
                if !rule.is_representable() {
                    return Err(FilterError::Unrepresentable {
                        pattern: rule.pattern,
                    });
                }
                let compiled = CompiledRule::new(rule)?;
                trace_filter_rule_added(compiled.rule.pattern(), compiled.rule.is_skip());
                Ok(compiled)
            })
            .collect::<Result<Vec<_>, FilterError>>()?;

        Ok(Self::from_compiled(rules))
    }

    fn from_compiled(rules: Vec<CompiledRule>) -> Self {
        Self {
            inner: Arc::new(FilterSetInner { rules }),
        }
    }

    /// Returns `true` if the set contains no rules.
    ///
    /// An empty set enables nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.rules.is_empty()
    }

    /// Returns the number of rules, allow and skip combined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.rules.len()
    }

    /// Returns `true` if `namespace` is enabled by this set.
    #[must_use]
    pub fn allows(&self, namespace: &str) -> bool {
        self.decide(namespace).is_enabled()
    }

    /// Evaluates `namespace` and reports which rule, if any, decided it.
    #[must_use]
    pub fn decide(&self, namespace: &str) -> Decision<'_> {
        let decision = self.inner.decision(namespace);
        trace_filter_decision(
            namespace,
            decision.is_enabled(),
            decision.rule().map(FilterRule::pattern),
        );
        decision
    }

    /// Iterates over every rule in the order it was written.
    pub fn rules(&self) -> impl Iterator<Item = &FilterRule> {
        self.inner.rules.iter().map(|compiled| &compiled.rule)
    }

    /// Iterates over the allow rules in the order they were written.
    pub fn allow_rules(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules().filter(|rule| !rule.is_skip())
    }

    /// Iterates over the skip rules in the order they were written.
    pub fn skip_rules(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules().filter(|rule| rule.is_skip())
    }

    /// Rebuilds the pattern string this set was compiled from.
    ///
    /// Rules are joined with `,` in their original order and skip rules get
    /// their `-` back, so `FilterSet::parse(&set.to_pattern_string())`
    /// produces an equal set. Separators and blank tokens from the source
    /// string are normalised away.
    ///
    /// ```
    /// use filters::FilterSet;
    ///
    /// let set = FilterSet::parse(" a  b,,-c ");
    /// assert_eq!(set.to_pattern_string(), "a,b,-c");
    /// assert_eq!(FilterSet::parse(&set.to_pattern_string()), set);
    /// ```
    #[must_use]
    pub fn to_pattern_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.rules().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(rule, f)?;
        }
        Ok(())
    }
}

impl PartialEq for FilterSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.rules().eq(other.rules())
    }
}

impl Eq for FilterSet {}

impl std::str::FromStr for FilterSet {
    type Err = std::convert::Infallible;

    fn from_str(patterns: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(patterns))
    }
}

/// Splits a pattern string into its non-empty tokens.
///
/// Commas are the documented separator; whitespace is accepted as a legacy
/// separator.
pub fn split_tokens(patterns: &str) -> impl Iterator<Item = &str> {
    patterns
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
}
