//! crates/logging/src/arg.rs
//! Positional arguments accepted by [`Logger::log`](crate::Logger::log).

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A single positional argument for a log call.
///
/// Values are captured eagerly when the argument is built so formatting never
/// has to reach back into caller data. Structured values are either
/// serialised up front ([`Arg::json`]) or rendered through their
/// [`Debug`](fmt::Debug) implementation ([`Arg::inspect`]).
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// Plain text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Absent value.
    Null,
    /// Serialised JSON, or the error message if serialisation failed.
    Json(Result<Value, String>),
    /// Captured `{:?}` and `{:#?}` renderings.
    Inspect {
        /// Single-line rendering.
        compact: String,
        /// Multi-line rendering.
        pretty: String,
    },
}

impl Arg {
    /// Serialises `value` to JSON for `%j`.
    ///
    /// Serialisation errors are kept and rendered inline when the argument is
    /// formatted, never reported to the caller.
    ///
    /// ```
    /// use logging::Arg;
    /// use std::collections::BTreeMap;
    ///
    /// let ok = Arg::json(&[1, 2, 3]);
    /// assert_eq!(ok.to_string(), "[1,2,3]");
    ///
    /// // JSON object keys must be strings.
    /// let bad = Arg::json(&BTreeMap::from([((1, 2), "tuple key")]));
    /// assert!(matches!(bad, Arg::Json(Err(_))));
    /// ```
    pub fn json<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self::Json(serde_json::to_value(value).map_err(|error| error.to_string()))
    }

    /// Captures the [`Debug`](fmt::Debug) renderings of `value` for `%o` and
    /// `%O`.
    pub fn inspect<T>(value: &T) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        Self::Inspect {
            compact: format!("{value:?}"),
            pretty: format!("{value:#?}"),
        }
    }

    /// Returns the text of a [`Arg::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric interpretation used by `%d`.
    ///
    /// Text is trimmed and parsed (blank text is zero), booleans map to `1`
    /// and `0`, null is zero and anything without a numeric reading is NaN.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Str(text) => parse_number(text),
            Self::Int(value) => *value as f64,
            Self::UInt(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Null => 0.0,
            Self::Json(Ok(Value::Number(number))) => number.as_f64().unwrap_or(f64::NAN),
            Self::Json(Ok(Value::String(text))) => parse_number(text),
            Self::Json(Ok(Value::Bool(value))) => f64::from(u8::from(*value)),
            Self::Json(Ok(Value::Null)) => 0.0,
            Self::Json(_) | Self::Inspect { .. } => f64::NAN,
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Renders a float the way diagnostics expect: integral values without a
/// trailing `.0`, and `NaN`/`Infinity` spelled out.
pub(crate) fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_owned()
    } else {
        value.to_string()
    }
}

/// Marker substituted for a value that could not be serialised.
pub(crate) fn json_error_marker(message: &str) -> String {
    format!("[UnexpectedJSONParseError]: {message}")
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&display_number(*value)),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::Json(Ok(Value::String(text))) => f.write_str(text),
            Self::Json(Ok(value)) => write!(f, "{value}"),
            Self::Json(Err(message)) => f.write_str(&json_error_marker(message)),
            Self::Inspect { compact, .. } => f.write_str(compact),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Json(Ok(value))
    }
}

impl<T> From<Option<T>> for Arg
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}
