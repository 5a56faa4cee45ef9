use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{DurationError, InvalidFormatReason};
use crate::format::{FormatOptions, format};
use crate::unit::Unit;

/// Longest input accepted by [`parse`], in bytes.
///
/// Anything longer is rejected before scanning so pathological strings cannot
/// drive up matching cost.
pub const MAX_INPUT_LEN: usize = 100;

/// Parses a human readable duration into a millisecond count.
///
/// The accepted grammar is an optional `-`, a decimal numeral whose
/// fractional part needs at least one digit (`1`, `1.5`, `.5`), optional
/// whitespace and an optional case-insensitive [`Unit`] suffix. Without a
/// suffix the value is taken as milliseconds.
///
/// # Examples
///
/// ```
/// use duration::parse;
///
/// assert_eq!(parse("1m")?, 60_000.0);
/// assert_eq!(parse("2 days")?, 172_800_000.0);
/// assert_eq!(parse("-.5h")?, -1_800_000.0);
/// assert!(parse("10-.5").is_err());
/// # Ok::<(), duration::DurationError>(())
/// ```
pub fn parse(text: &str) -> Result<f64, DurationError> {
    if text.is_empty() {
        return Err(InvalidFormatReason::Empty.into());
    }

    if text.len() > MAX_INPUT_LEN {
        return Err(InvalidFormatReason::TooLong.into());
    }

    let numeral_end = scan_numeral(text.as_bytes())?;
    let (numeral, remainder) = text.split_at(numeral_end);
    let suffix = remainder.trim_start_matches(|ch: char| ch.is_ascii_whitespace());

    let unit = if suffix.is_empty() {
        Unit::Milliseconds
    } else {
        resolve_unit(suffix)?
    };

    let value = numeral
        .parse::<f64>()
        .map_err(|_| DurationError::from(InvalidFormatReason::Malformed))?;

    Ok(value * unit.millis())
}

/// Parses a duration into a [`std::time::Duration`].
///
/// Negative values and values beyond the range of `Duration` are rejected
/// with [`InvalidFormatReason::OutOfRange`].
///
/// ```
/// use duration::parse_std;
/// use std::time::Duration;
///
/// assert_eq!(parse_std("1.5s")?, Duration::from_millis(1_500));
/// assert!(parse_std("-1s").is_err());
/// # Ok::<(), duration::DurationError>(())
/// ```
pub fn parse_std(text: &str) -> Result<Duration, DurationError> {
    let millis = parse(text)?;
    if millis < 0.0 {
        return Err(InvalidFormatReason::OutOfRange.into());
    }

    Duration::try_from_secs_f64(millis / 1_000.0)
        .map_err(|_| InvalidFormatReason::OutOfRange.into())
}

/// Returns the byte offset where the numeral ends.
///
/// Mirrors `-?\d*\.?\d+`: the last run of digits must be non-empty, so `1.`
/// and `-` are rejected while `.5` is accepted.
fn scan_numeral(bytes: &[u8]) -> Result<usize, DurationError> {
    let mut index = usize::from(bytes.first() == Some(&b'-'));

    let integer_start = index;
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    let integer_digits = index - integer_start;

    if bytes.get(index) == Some(&b'.') {
        index += 1;
        let fraction_start = index;
        while bytes.get(index).is_some_and(u8::is_ascii_digit) {
            index += 1;
        }

        if index == fraction_start {
            return Err(InvalidFormatReason::Malformed.into());
        }
    } else if integer_digits == 0 {
        return Err(InvalidFormatReason::Malformed.into());
    }

    Ok(index)
}

fn resolve_unit(suffix: &str) -> Result<Unit, DurationError> {
    if let Some(unit) = Unit::from_suffix(suffix) {
        return Ok(unit);
    }

    let reason = if suffix.bytes().all(|byte| byte.is_ascii_alphabetic()) {
        InvalidFormatReason::UnknownUnit
    } else {
        InvalidFormatReason::Malformed
    };
    Err(reason.into())
}

/// Millisecond count that parses from and displays as a duration string.
///
/// ```
/// use duration::Millis;
///
/// let timeout: Millis = "90s".parse()?;
/// assert_eq!(timeout.get(), 90_000.0);
/// assert_eq!(timeout.to_string(), "2m");
/// # Ok::<(), duration::DurationError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Millis(pub f64);

impl Millis {
    /// Returns the raw millisecond count.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Millis {
    type Err = DurationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text).map(Self)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format(self.0, FormatOptions::short()) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
