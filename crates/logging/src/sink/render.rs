use std::fmt::Write as _;

use crate::record::Record;

const RESET: &str = "\x1b[0m";

/// Renders `record` into a single string without a trailing newline.
///
/// With `colors` every line of the message is prefixed by the namespace in
/// the record's colour and bold, and the elapsed time follows in the same
/// colour:
///
/// ```text
///   \x1b[36;1mapp:db \x1b[0mconnected \x1b[36m+12ms\x1b[0m
/// ```
///
/// Colours from 8 upwards use the 256-colour escape (`38;5;<n>`). Without
/// colours the layout is `<namespace> <message> +<diff>`.
///
/// ```
/// use std::time::Duration;
/// use logging::{Record, render};
///
/// let record = Record::new("app", vec!["ready".into()], Duration::from_millis(5), 2);
/// assert_eq!(render(&record, false), "app ready +5ms");
/// ```
#[must_use]
pub fn render(record: &Record, colors: bool) -> String {
    let (first, rest) = record
        .args()
        .split_first()
        .map_or(("", &[][..]), |(first, rest)| (first.as_str(), rest));

    let mut line = String::new();
    if colors {
        let code = color_code(record.color());
        let prefix = format!("  {code};1m{} {RESET}", record.namespace());
        for (index, part) in first.split('\n').enumerate() {
            if index > 0 {
                line.push('\n');
            }
            line.push_str(&prefix);
            line.push_str(part);
        }
        for arg in rest {
            line.push(' ');
            line.push_str(arg);
        }
        let _ = write!(line, " {code}m+{}{RESET}", record.diff());
    } else {
        line.push_str(record.namespace());
        line.push(' ');
        line.push_str(first);
        for arg in rest {
            line.push(' ');
            line.push_str(arg);
        }
        let _ = write!(line, " +{}", record.diff());
    }
    line
}

fn color_code(color: u8) -> String {
    if color < 8 {
        format!("\x1b[3{color}")
    } else {
        format!("\x1b[38;5;{color}")
    }
}
