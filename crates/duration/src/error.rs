use std::fmt;

use thiserror::Error;

/// Classification of a rejected duration string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidFormatReason {
    /// The input was empty.
    Empty,
    /// The input exceeded [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) bytes.
    TooLong,
    /// The numeral did not follow the `-?digits.digits` grammar or trailing
    /// characters followed the unit.
    Malformed,
    /// The text following the numeral was not a recognised unit.
    UnknownUnit,
    /// The value cannot be represented as a [`std::time::Duration`]
    /// (negative or too large).
    OutOfRange,
}

impl fmt::Display for InvalidFormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::Empty => "duration string is empty",
            Self::TooLong => "duration string exceeds the maximum length",
            Self::Malformed => "duration string is not a number followed by an optional unit",
            Self::UnknownUnit => "duration string uses an unknown unit",
            Self::OutOfRange => "duration is negative or too large",
        };

        f.write_str(description)
    }
}

/// Errors reported by [`parse`](crate::parse) and [`format`](crate::format).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DurationError {
    /// The text could not be parsed as a duration.
    #[error("invalid duration format: {0}")]
    InvalidFormat(InvalidFormatReason),
    /// The millisecond value was not a finite number.
    #[error("duration must be a finite number, got {0}")]
    InvalidInput(f64),
}

impl DurationError {
    /// Returns the parse failure reason, if this is a format error.
    #[must_use]
    pub const fn format_reason(self) -> Option<InvalidFormatReason> {
        match self {
            Self::InvalidFormat(reason) => Some(reason),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<InvalidFormatReason> for DurationError {
    fn from(reason: InvalidFormatReason) -> Self {
        Self::InvalidFormat(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let error = DurationError::InvalidFormat(InvalidFormatReason::UnknownUnit);
        assert_eq!(
            error.to_string(),
            "invalid duration format: duration string uses an unknown unit"
        );
    }

    #[test]
    fn invalid_input_reports_value() {
        let error = DurationError::InvalidInput(f64::INFINITY);
        assert!(error.to_string().contains("inf"));
        assert_eq!(error.format_reason(), None);
    }
}
