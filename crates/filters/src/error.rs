use thiserror::Error;

/// Error produced when an explicit rule cannot join a [`FilterSet`].
///
/// [`FilterSet`]: crate::FilterSet
#[derive(Debug, Error)]
pub enum FilterError {
    /// The rule's wildcard pattern could not be compiled into a matcher.
    #[error("failed to compile namespace pattern '{pattern}': {source}")]
    Compile {
        /// Offending pattern.
        pattern: String,
        /// Underlying regex failure.
        #[source]
        source: regex::Error,
    },
    /// The rule would not read back as itself from a pattern string: an
    /// allow pattern that is empty or starts with `-`, or any pattern
    /// containing a `,` or whitespace.
    #[error("namespace pattern '{pattern}' cannot be written as a pattern string")]
    Unrepresentable {
        /// Offending pattern.
        pattern: String,
    },
}

impl FilterError {
    /// Creates a [`FilterError::Compile`] for the given pattern and source error.
    pub(crate) fn new(pattern: String, source: regex::Error) -> Self {
        Self::Compile { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Compile { pattern, .. } | Self::Unrepresentable { pattern } => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;
    use std::error::Error as _;

    #[test]
    fn filter_error_preserves_pattern_and_source() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error = FilterError::new("(".into(), regex_err.clone());

        assert_eq!(error.pattern(), "(");
        assert!(error.to_string().contains("failed to compile"));
        assert!(error.source().is_some());
        assert_eq!(error.source().unwrap().to_string(), regex_err.to_string());
    }

    #[test]
    fn unrepresentable_error_has_no_source() {
        let error = FilterError::Unrepresentable {
            pattern: "a,b".into(),
        };

        assert_eq!(error.pattern(), "a,b");
        assert!(error.to_string().contains("'a,b'"));
        assert!(error.source().is_none());
    }
}
