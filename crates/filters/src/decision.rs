use crate::{FilterAction, FilterRule, compiled::CompiledRule};

#[derive(Debug, Default)]
pub(crate) struct FilterSetInner {
    /// Every compiled rule in the order it appeared in the pattern string.
    pub(crate) rules: Vec<CompiledRule>,
}

impl FilterSetInner {
    pub(crate) fn decision(&self, namespace: &str) -> Decision<'_> {
        if let Some(rule) = first_matching_rule(&self.rules, namespace, FilterAction::Skip) {
            return Decision::Skipped(&rule.rule);
        }

        match first_matching_rule(&self.rules, namespace, FilterAction::Allow) {
            Some(rule) => Decision::Allowed(&rule.rule),
            None => Decision::Unmatched,
        }
    }
}

fn first_matching_rule<'a>(
    rules: &'a [CompiledRule],
    namespace: &str,
    action: FilterAction,
) -> Option<&'a CompiledRule> {
    rules
        .iter()
        .find(|rule| rule.rule.action == action && rule.matches(namespace))
}

/// Outcome of evaluating a namespace against a [`FilterSet`](crate::FilterSet).
///
/// Skip rules are consulted before allow rules, so a namespace matched by both
/// reports [`Decision::Skipped`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision<'a> {
    /// An allow rule matched and no skip rule did.
    Allowed(&'a FilterRule),
    /// A skip rule matched.
    Skipped(&'a FilterRule),
    /// No rule matched; the namespace stays disabled.
    Unmatched,
}

impl<'a> Decision<'a> {
    /// Reports whether the namespace is enabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// Returns the rule that produced the decision, if any.
    #[must_use]
    pub const fn rule(self) -> Option<&'a FilterRule> {
        match self {
            Self::Allowed(rule) | Self::Skipped(rule) => Some(rule),
            Self::Unmatched => None,
        }
    }
}
