use std::fmt;

/// Effect a rule has on a namespace it matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FilterAction {
    /// Enable the matching namespace unless a skip rule also matches.
    Allow,
    /// Disable the matching namespace regardless of allow rules.
    Skip,
}

impl FilterAction {
    /// Prefix written in front of the pattern when the rule is rendered back
    /// into a pattern string.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Allow => "",
            Self::Skip => "-",
        }
    }
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => f.write_str("allow"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterAction;

    #[test]
    fn display_variants_matches_expected_tokens() {
        let cases = [(FilterAction::Allow, "allow"), (FilterAction::Skip, "skip")];

        for (action, expected) in cases {
            assert_eq!(action.to_string(), expected);
        }
    }

    #[test]
    fn only_skip_rules_carry_a_prefix() {
        assert_eq!(FilterAction::Allow.prefix(), "");
        assert_eq!(FilterAction::Skip.prefix(), "-");
    }
}
