use std::fmt;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = SECOND * 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
const YEAR: f64 = DAY * 365.25;

/// Time unit understood by the codec.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// One millisecond.
    Milliseconds,
    /// 1 000 milliseconds.
    Seconds,
    /// 60 seconds.
    Minutes,
    /// 60 minutes.
    Hours,
    /// 24 hours.
    Days,
    /// 7 days.
    Weeks,
    /// 365.25 days.
    Years,
}

impl Unit {
    /// Units selected by [`format`](crate::format), largest first.
    pub(crate) const FORMAT_ORDER: [Self; 4] = [Self::Days, Self::Hours, Self::Minutes, Self::Seconds];

    /// Resolves a unit suffix, ignoring ASCII case.
    ///
    /// ```
    /// use duration::Unit;
    ///
    /// assert_eq!(Unit::from_suffix("HRS"), Some(Unit::Hours));
    /// assert_eq!(Unit::from_suffix("msecs"), Some(Unit::Milliseconds));
    /// assert_eq!(Unit::from_suffix("fortnight"), None);
    /// ```
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Self::Milliseconds,
            "s" | "sec" | "secs" | "second" | "seconds" => Self::Seconds,
            "m" | "min" | "mins" | "minute" | "minutes" => Self::Minutes,
            "h" | "hr" | "hrs" | "hour" | "hours" => Self::Hours,
            "d" | "day" | "days" => Self::Days,
            "w" | "week" | "weeks" => Self::Weeks,
            "y" | "yr" | "yrs" | "year" | "years" => Self::Years,
            _ => return None,
        };
        Some(unit)
    }

    /// Number of milliseconds in one unit.
    #[must_use]
    pub const fn millis(self) -> f64 {
        match self {
            Self::Milliseconds => 1.0,
            Self::Seconds => SECOND,
            Self::Minutes => MINUTE,
            Self::Hours => HOUR,
            Self::Days => DAY,
            Self::Weeks => WEEK,
            Self::Years => YEAR,
        }
    }

    /// Abbreviation used by the short format (`ms`, `s`, `m`, ...).
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Weeks => "w",
            Self::Years => "y",
        }
    }

    /// Singular name used by the long format.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Milliseconds => "millisecond",
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Years => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
