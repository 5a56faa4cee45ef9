use std::fmt;

use crate::FilterAction;

/// User-visible rule consisting of an action and a wildcard pattern.
///
/// The pattern is stored without the `-` negation marker; [`Display`]
/// restores it so a rule renders exactly as it appeared in a pattern string.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FilterRule {
    pub(crate) action: FilterAction,
    pub(crate) pattern: String,
}

impl FilterRule {
    /// Creates an allow rule for `pattern`.
    #[must_use]
    pub fn allow(pattern: impl Into<String>) -> Self {
        Self {
            action: FilterAction::Allow,
            pattern: pattern.into(),
        }
    }

    /// Creates a skip rule for `pattern`.
    #[must_use]
    pub fn skip(pattern: impl Into<String>) -> Self {
        Self {
            action: FilterAction::Skip,
            pattern: pattern.into(),
        }
    }

    /// Interprets a single trimmed token from a pattern string.
    ///
    /// A leading `-` marks a skip rule; only the first `-` is consumed.
    ///
    /// # Examples
    /// ```
    /// use filters::{FilterAction, FilterRule};
    ///
    /// let rule = FilterRule::from_token("-net:*");
    /// assert_eq!(rule.action(), FilterAction::Skip);
    /// assert_eq!(rule.pattern(), "net:*");
    /// assert_eq!(FilterRule::from_token("--x").pattern(), "-x");
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.strip_prefix('-') {
            Some(pattern) => Self::skip(pattern),
            None => Self::allow(token),
        }
    }

    /// Returns the rule action.
    #[must_use]
    pub const fn action(&self) -> FilterAction {
        self.action
    }

    /// Returns the pattern text without the negation marker.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Reports whether this is a skip rule.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self.action, FilterAction::Skip)
    }

    /// Reports whether the pattern is the lone `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.pattern == "*"
    }

    /// Reports whether the rule's [`Display`](fmt::Display) form parses back
    /// to this exact rule.
    ///
    /// Separators can never appear inside a token, a blank allow token is
    /// dropped, and an allow pattern starting with `-` would read back as a
    /// skip rule.
    ///
    /// ```
    /// use filters::FilterRule;
    ///
    /// assert!(FilterRule::allow("net:*").is_representable());
    /// assert!(FilterRule::skip("-x").is_representable());
    /// assert!(!FilterRule::allow("-x").is_representable());
    /// assert!(!FilterRule::allow("").is_representable());
    /// assert!(!FilterRule::skip("a b").is_representable());
    /// ```
    #[must_use]
    pub fn is_representable(&self) -> bool {
        if self
            .pattern
            .contains(|ch: char| ch == ',' || ch.is_whitespace())
        {
            return false;
        }
        self.is_skip() || (!self.pattern.is_empty() && !self.pattern.starts_with('-'))
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.action.prefix(), self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_restores_negation_marker() {
        assert_eq!(FilterRule::allow("abc*").to_string(), "abc*");
        assert_eq!(FilterRule::skip("abc").to_string(), "-abc");
        assert_eq!(FilterRule::skip("*").to_string(), "-*");
    }

    #[test]
    fn from_token_round_trips_through_display() {
        for token in ["test", "-test", "*", "-*", "a:*:b", "--double"] {
            assert_eq!(FilterRule::from_token(token).to_string(), token);
        }
    }

    #[test]
    fn wildcard_detection_is_exact() {
        assert!(FilterRule::allow("*").is_wildcard());
        assert!(FilterRule::skip("*").is_wildcard());
        assert!(!FilterRule::allow("**").is_wildcard());
        assert!(!FilterRule::allow("a*").is_wildcard());
    }
}
