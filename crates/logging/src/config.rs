//! crates/logging/src/config.rs
//! Start-up configuration read from the process environment.

use std::io::IsTerminal;

use crate::color::DEFAULT_PALETTE;

/// Environment variable holding the initial pattern string.
pub const NAMESPACES_VAR: &str = "DEBUG";

/// Environment variable forcing coloured output on or off.
pub const COLORS_VAR: &str = "DEBUG_COLORS";

/// Settings used to seed a [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugConfig {
    /// Pattern string enabled at start-up, if any.
    pub namespaces: Option<String>,
    /// Whether the default hook renders ANSI colours.
    pub colors: bool,
    /// Colours assigned to namespaces.
    pub palette: Vec<u8>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            namespaces: None,
            colors: false,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl DebugConfig {
    /// Reads [`NAMESPACES_VAR`] and [`COLORS_VAR`] from the environment.
    ///
    /// When `DEBUG_COLORS` is unset or unrecognised, colours follow whether
    /// standard error is a terminal.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|name| std::env::var(name).ok());
        let forced = std::env::var(COLORS_VAR).ok().and_then(|value| parse_flag(&value));
        if forced.is_none() {
            config.colors = std::io::stderr().is_terminal();
        }
        config
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// An empty `DEBUG` value counts as unset. Colours default to off.
    ///
    /// ```
    /// use logging::DebugConfig;
    ///
    /// let config = DebugConfig::from_lookup(|name| match name {
    ///     "DEBUG" => Some("app:*,-app:noisy".to_owned()),
    ///     "DEBUG_COLORS" => Some("on".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// assert_eq!(config.namespaces.as_deref(), Some("app:*,-app:noisy"));
    /// assert!(config.colors);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespaces = lookup(NAMESPACES_VAR).filter(|value| !value.trim().is_empty());
        let colors = lookup(COLORS_VAR)
            .and_then(|value| parse_flag(&value))
            .unwrap_or(false);

        Self {
            namespaces,
            colors,
            ..Self::default()
        }
    }

    /// Replaces the pattern string.
    #[must_use]
    pub fn with_namespaces(mut self, namespaces: impl Into<String>) -> Self {
        self.namespaces = Some(namespaces.into());
        self
    }

    /// Turns coloured output on or off.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Replaces the colour palette.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<Vec<u8>>) -> Self {
        self.palette = palette.into();
        self
    }
}

/// Interprets a boolean-ish environment value.
///
/// `yes`, `on`, `true` and `enabled` are true; `no`, `off`, `false` and
/// `disabled` are false (case-insensitive). Any other value is read as an
/// integer where zero is false. Returns `None` when nothing applies.
///
/// ```
/// use logging::parse_flag;
///
/// assert_eq!(parse_flag("Enabled"), Some(true));
/// assert_eq!(parse_flag("0"), Some(false));
/// assert_eq!(parse_flag("sometimes"), None);
/// ```
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "yes" | "on" | "true" | "enabled" => Some(true),
        "no" | "off" | "false" | "disabled" => Some(false),
        _ => value.parse::<i64>().ok().map(|number| number != 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn defaults() {
        let config = DebugConfig::default();
        assert_eq!(config.namespaces, None);
        assert!(!config.colors);
        assert_eq!(config.palette, DEFAULT_PALETTE);
    }

    #[test]
    fn empty_environment_matches_default() {
        assert_eq!(DebugConfig::from_lookup(lookup(&[])), DebugConfig::default());
    }

    #[test]
    fn blank_pattern_counts_as_unset() {
        let config = DebugConfig::from_lookup(lookup(&[("DEBUG", "  ")]));
        assert_eq!(config.namespaces, None);
    }

    #[test]
    fn colour_flags() {
        for (value, expected) in [
            ("yes", Some(true)),
            ("ON", Some(true)),
            ("true", Some(true)),
            ("enabled", Some(true)),
            ("no", Some(false)),
            ("Off", Some(false)),
            ("false", Some(false)),
            ("disabled", Some(false)),
            ("1", Some(true)),
            ("0", Some(false)),
            (" 2 ", Some(true)),
            ("maybe", None),
            ("", None),
        ] {
            assert_eq!(parse_flag(value), expected, "{value:?}");
        }
    }

    #[test]
    fn unrecognised_colour_value_is_off() {
        let config = DebugConfig::from_lookup(lookup(&[("DEBUG_COLORS", "sometimes")]));
        assert!(!config.colors);
    }

    #[test]
    fn builder_methods() {
        let config = DebugConfig::default()
            .with_namespaces("a")
            .with_colors(true)
            .with_palette([1, 2]);
        assert_eq!(config.namespaces.as_deref(), Some("a"));
        assert!(config.colors);
        assert_eq!(config.palette, [1, 2]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn config_round_trips_through_json() {
            let config = DebugConfig::default().with_namespaces("a,-b").with_colors(true);
            let json = serde_json::to_string(&config).expect("serialise");
            let decoded: DebugConfig = serde_json::from_str(&json).expect("deserialise");
            assert_eq!(decoded, config);
        }

        #[test]
        fn missing_fields_use_defaults() {
            let decoded: DebugConfig =
                serde_json::from_str(r#"{"namespaces":"x"}"#).expect("deserialise");
            assert_eq!(decoded.palette, DEFAULT_PALETTE);
            assert!(!decoded.colors);
        }
    }
}
