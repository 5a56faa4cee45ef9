//! crates/logging/src/formatters.rs
//! `%`-directive substitution for log messages.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::arg::{Arg, display_number, json_error_marker};

/// Formatting function bound to a directive character.
pub type DirectiveFn = Arc<dyn Fn(&Arg) -> String + Send + Sync>;

/// Table mapping directive characters to formatting functions.
///
/// The default table understands:
///
/// | Directive | Rendering |
/// |-----------|-----------|
/// | `%s` | text ([`Arg`]'s `Display`) |
/// | `%d` | number ([`Arg::to_number`]) |
/// | `%j` | JSON |
/// | `%o` | single-line inspection |
/// | `%O` | multi-line inspection |
///
/// `%%` always produces a literal `%`. Hosts can add or replace directives
/// with [`register`](Self::register).
#[derive(Clone)]
pub struct Formatters {
    table: HashMap<char, DirectiveFn>,
}

impl Formatters {
    /// Creates a table without any directives; only `%%` is recognised.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Binds `directive` to `formatter`, replacing any previous binding.
    ///
    /// ```
    /// use logging::{Arg, Formatters};
    ///
    /// let mut formatters = Formatters::default();
    /// formatters.register('h', |arg| format!("{:x}", arg.to_number() as u64));
    ///
    /// let output = formatters.apply("addr=%h", &[Arg::from(255_u32)]);
    /// assert_eq!(output, ["addr=ff"]);
    /// ```
    pub fn register<F>(&mut self, directive: char, formatter: F) -> &mut Self
    where
        F: Fn(&Arg) -> String + Send + Sync + 'static,
    {
        self.table.insert(directive, Arc::new(formatter));
        self
    }

    /// Removes the binding for `directive`, returning it if present.
    pub fn unregister(&mut self, directive: char) -> Option<DirectiveFn> {
        self.table.remove(&directive)
    }

    /// Reports whether `directive` is bound.
    #[must_use]
    pub fn contains(&self, directive: char) -> bool {
        self.table.contains_key(&directive)
    }

    /// Substitutes directives in `template` with `args`.
    ///
    /// Each bound directive consumes the next unused argument. Directives
    /// that are unbound, or that run out of arguments, are copied through
    /// unchanged. Arguments left over after substitution are rendered with
    /// `Display` and returned after the formatted message, so the result is
    /// never empty.
    #[must_use]
    pub fn apply(&self, template: &str, args: &[Arg]) -> Vec<String> {
        let mut message = String::with_capacity(template.len());
        let mut remaining = args.iter();
        let mut chars = template.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                message.push(ch);
                continue;
            }

            let Some(&directive) = chars.peek() else {
                message.push('%');
                break;
            };

            if directive == '%' {
                chars.next();
                message.push('%');
                continue;
            }

            match self.table.get(&directive) {
                Some(formatter) if directive.is_ascii_alphabetic() => {
                    if let Some(arg) = remaining.next() {
                        chars.next();
                        message.push_str(&formatter(arg));
                    } else {
                        message.push('%');
                    }
                }
                _ => message.push('%'),
            }
        }

        let mut output = Vec::with_capacity(1 + remaining.len());
        output.push(message);
        output.extend(remaining.map(ToString::to_string));
        output
    }
}

impl Default for Formatters {
    fn default() -> Self {
        let mut formatters = Self::empty();
        formatters
            .register('s', format_string)
            .register('d', format_number)
            .register('j', format_json)
            .register('o', format_compact)
            .register('O', format_pretty);
        formatters
    }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut directives: Vec<_> = self.table.keys().collect();
        directives.sort_unstable();
        f.debug_struct("Formatters")
            .field("directives", &directives)
            .finish()
    }
}

fn format_string(arg: &Arg) -> String {
    arg.to_string()
}

fn format_number(arg: &Arg) -> String {
    match arg {
        Arg::Int(value) => value.to_string(),
        Arg::UInt(value) => value.to_string(),
        other => display_number(other.to_number()),
    }
}

fn format_json(arg: &Arg) -> String {
    match arg {
        Arg::Json(Ok(value)) => value.to_string(),
        Arg::Json(Err(message)) => json_error_marker(message),
        Arg::Str(text) => Value::from(text.as_str()).to_string(),
        Arg::Int(value) => value.to_string(),
        Arg::UInt(value) => value.to_string(),
        // JSON has no NaN or infinities.
        Arg::Float(value) if !value.is_finite() => "null".to_owned(),
        Arg::Float(value) => display_number(*value),
        Arg::Bool(value) => value.to_string(),
        Arg::Null => "null".to_owned(),
        Arg::Inspect { compact, .. } => Value::from(compact.as_str()).to_string(),
    }
}

fn format_compact(arg: &Arg) -> String {
    match arg {
        Arg::Str(text) => format!("{text:?}"),
        Arg::Json(Ok(value)) => value.to_string(),
        Arg::Inspect { compact, .. } => compact.clone(),
        other => other.to_string(),
    }
}

fn format_pretty(arg: &Arg) -> String {
    match arg {
        Arg::Json(Ok(value)) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|error| json_error_marker(&error.to_string()))
        }
        Arg::Inspect { pretty, .. } => pretty.clone(),
        other => format_compact(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(template: &str, args: &[Arg]) -> Vec<String> {
        Formatters::default().apply(template, args)
    }

    #[test]
    fn substitutes_each_directive_in_order() {
        let output = apply("%s has %d items", &[Arg::from("cart"), Arg::from(3)]);
        assert_eq!(output, ["cart has 3 items"]);
    }

    #[test]
    fn double_percent_is_literal() {
        assert_eq!(apply("100%% done", &[]), ["100% done"]);
        assert_eq!(apply("%%s", &[Arg::from("x")]), ["%s", "x"]);
    }

    #[test]
    fn leftover_arguments_are_appended() {
        let output = apply("ready", &[Arg::from(1), Arg::from("two")]);
        assert_eq!(output, ["ready", "1", "two"]);
    }

    #[test]
    fn missing_arguments_leave_directive_in_place() {
        assert_eq!(apply("%s and %s", &[Arg::from("one")]), ["one and %s"]);
    }

    #[test]
    fn unknown_directives_do_not_consume_arguments() {
        let output = apply("%x %s %5", &[Arg::from("value")]);
        assert_eq!(output, ["%x value %5"]);
    }

    #[test]
    fn trailing_percent_is_kept() {
        assert_eq!(apply("50%", &[]), ["50%"]);
    }

    #[test]
    fn number_directive_coerces() {
        let output = apply(
            "%d %d %d %d",
            &[Arg::from("42"), Arg::from("nope"), Arg::from(2.5), Arg::from(-7_i64)],
        );
        assert_eq!(output, ["42 NaN 2.5 -7"]);
    }

    #[test]
    fn json_directive() {
        let output = apply(
            "%j %j %j %j",
            &[
                Arg::json(&serde_json::json!({"id": 7})),
                Arg::from("quoted"),
                Arg::from(f64::NAN),
                Arg::Null,
            ],
        );
        assert_eq!(output, [r#"{"id":7} "quoted" null null"#]);
    }

    #[test]
    fn json_failures_render_inline() {
        let output = apply("payload=%j", &[Arg::Json(Err("key must be a string".into()))]);
        assert_eq!(output, ["payload=[UnexpectedJSONParseError]: key must be a string"]);
    }

    #[test]
    fn inspection_directives() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Point {
            x: i32,
            y: i32,
        }

        let point = Arg::inspect(&Point { x: 1, y: 2 });
        assert_eq!(apply("%o", &[point.clone()]), ["Point { x: 1, y: 2 }"]);

        let pretty = apply("%O", &[point]);
        assert!(pretty[0].starts_with("Point {\n"));

        assert_eq!(apply("%o", &[Arg::from("text")]), [r#""text""#]);
        assert_eq!(apply("%O", &[Arg::from(12345)]), ["12345"]);
    }

    #[test]
    fn registered_directives_override_defaults() {
        let mut formatters = Formatters::default();
        formatters.register('s', |arg| arg.to_string().to_uppercase());
        assert_eq!(formatters.apply("%s", &[Arg::from("loud")]), ["LOUD"]);

        assert!(formatters.unregister('s').is_some());
        assert!(!formatters.contains('s'));
        assert_eq!(formatters.apply("%s", &[Arg::from("x")]), ["%s", "x"]);
    }

    #[test]
    fn non_alphabetic_directives_are_never_substituted() {
        let mut formatters = Formatters::empty();
        formatters.register('1', |_| "one".to_owned());
        assert_eq!(formatters.apply("%1", &[Arg::from(1)]), ["%1", "1"]);
    }
}
