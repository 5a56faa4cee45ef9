use regex::Regex;

use crate::{FilterError, FilterRule};

/// Matcher built from a single [`FilterRule`].
#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    pub(crate) rule: FilterRule,
    matcher: Matcher,
}

#[derive(Clone, Debug)]
enum Matcher {
    /// The lone `*` pattern.
    Any,
    /// Pattern without wildcards; compared byte for byte.
    Exact,
    Wildcard(Regex),
}

impl CompiledRule {
    pub(crate) fn new(rule: FilterRule) -> Result<Self, FilterError> {
        let matcher = if rule.is_wildcard() {
            Matcher::Any
        } else if !rule.pattern.contains('*') {
            Matcher::Exact
        } else {
            let regex = wildcard_regex(&rule.pattern)
                .map_err(|error| FilterError::new(rule.pattern.clone(), error))?;
            Matcher::Wildcard(regex)
        };

        Ok(Self { rule, matcher })
    }

    pub(crate) fn matches(&self, namespace: &str) -> bool {
        match &self.matcher {
            Matcher::Any => true,
            Matcher::Exact => self.rule.pattern == namespace,
            Matcher::Wildcard(regex) => regex.is_match(namespace),
        }
    }
}

/// Translates a `*` wildcard pattern into an anchored regular expression.
///
/// Every other character is escaped, so `.`, `+`, `?`, brackets and the like
/// only ever match themselves.
fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expression = String::with_capacity(pattern.len() + 16);
    expression.push_str("^(?s:");
    for (index, literal) in pattern.split('*').enumerate() {
        if index > 0 {
            expression.push_str(".*?");
        }
        expression.push_str(&regex::escape(literal));
    }
    expression.push_str(")$");

    Regex::new(&expression)
}
