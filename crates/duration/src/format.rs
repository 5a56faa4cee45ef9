use std::time::Duration;

use crate::error::DurationError;
use crate::unit::Unit;

/// Selects between the compact and the spelled-out rendering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Render `10 seconds` instead of `10s`.
    pub long: bool,
}

impl FormatOptions {
    /// Compact form such as `-1h` or `500ms`.
    #[must_use]
    pub const fn short() -> Self {
        Self { long: false }
    }

    /// Spelled-out form such as `1 second` or `3 days`.
    #[must_use]
    pub const fn long() -> Self {
        Self { long: true }
    }
}

/// Formats a millisecond count using the largest unit its magnitude reaches.
///
/// Units are tried from days down to seconds; anything below one second is
/// printed in milliseconds. The quotient is rounded to the nearest integer,
/// halves rounding towards positive infinity, so `-1.5s` renders as `-1s`.
/// The long form pluralises the unit name whenever the rounded value is not
/// `1` or `-1`.
///
/// Any finite input is accepted, but [`parse`](crate::parse) only reads
/// strings up to [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) bytes, so output for
/// huge magnitudes (for example `1e300`) does not parse back.
///
/// # Errors
///
/// Returns [`DurationError::InvalidInput`] when `ms` is NaN or infinite.
///
/// # Examples
///
/// ```
/// use duration::{FormatOptions, format};
///
/// assert_eq!(format(500.0, FormatOptions::short())?, "500ms");
/// assert_eq!(format(234_234_234.0, FormatOptions::short())?, "3d");
/// assert_eq!(format(-10_000.0, FormatOptions::long())?, "-10 seconds");
/// assert!(format(f64::NAN, FormatOptions::long()).is_err());
/// # Ok::<(), duration::DurationError>(())
/// ```
pub fn format(ms: f64, options: FormatOptions) -> Result<String, DurationError> {
    if !ms.is_finite() {
        return Err(DurationError::InvalidInput(ms));
    }

    let magnitude = ms.abs();
    let unit = Unit::FORMAT_ORDER
        .into_iter()
        .find(|unit| magnitude >= unit.millis())
        .unwrap_or(Unit::Milliseconds);
    let value = round_half_up(ms / unit.millis());

    let rendered = if !options.long {
        format!("{value}{}", unit.short_name())
    } else if unit == Unit::Milliseconds {
        format!("{value} ms")
    } else if value.abs() == 1.0 {
        format!("{value} {}", unit.long_name())
    } else {
        format!("{value} {}s", unit.long_name())
    };

    Ok(rendered)
}

/// Shorthand for [`format`] with [`FormatOptions::short`].
pub fn format_short(ms: f64) -> Result<String, DurationError> {
    format(ms, FormatOptions::short())
}

/// Shorthand for [`format`] with [`FormatOptions::long`].
pub fn format_long(ms: f64) -> Result<String, DurationError> {
    format(ms, FormatOptions::long())
}

/// Formats a [`std::time::Duration`]. Sub-millisecond precision is kept
/// before rounding.
#[must_use]
pub fn format_std(duration: Duration, options: FormatOptions) -> String {
    let ms = duration.as_secs_f64() * 1_000.0;
    // Durations are always finite and non-negative.
    format(ms, options).unwrap_or_else(|_| format!("{ms}ms"))
}

fn round_half_up(value: f64) -> f64 {
    // `(value + 0.5).floor()` would round the addition itself just below .5.
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // Avoid rendering "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}
