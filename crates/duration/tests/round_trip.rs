//! Integration tests pairing `parse` with `format`.
//!
//! Formatting rounds to whole units, so parsing the short form back must land
//! within half a unit of the original value.

use duration::{FormatOptions, Unit, format, parse};
use proptest::prelude::*;

fn unit_for(ms: f64) -> Unit {
    [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds]
        .into_iter()
        .find(|unit| ms.abs() >= unit.millis())
        .unwrap_or(Unit::Milliseconds)
}

#[test]
fn representative_values_round_trip() {
    for ms in [
        0.0,
        250.0,
        1_000.0,
        45_000.0,
        60_000.0,
        5_400_000.0,
        86_400_000.0,
        -172_800_000.0,
    ] {
        let text = format(ms, FormatOptions::short()).expect("finite input");
        let parsed = parse(&text).expect("formatted output parses");
        let tolerance = unit_for(ms).millis() / 2.0;
        assert!(
            (parsed - ms).abs() <= tolerance,
            "{ms} formatted as {text} parsed back as {parsed}"
        );
    }
}

#[test]
fn long_form_parses_back() {
    let text = format(7_200_000.0, FormatOptions::long()).expect("finite input");
    assert_eq!(text, "2 hours");
    assert_eq!(parse(&text).expect("long form parses"), 7_200_000.0);
}

proptest! {
    #[test]
    fn short_form_recovers_unit_magnitude(ms in -1.0e12f64..1.0e12f64) {
        let text = format(ms, FormatOptions::short()).expect("finite input");
        let parsed = parse(&text).expect("formatted output parses");
        let tolerance = unit_for(ms).millis() / 2.0 + 1.0;
        prop_assert!((parsed - ms).abs() <= tolerance, "{} -> {} -> {}", ms, text, parsed);
    }

    #[test]
    fn integer_milliseconds_parse_exactly(value in 0u32..1_000_000u32) {
        let parsed = parse(&value.to_string()).expect("digits parse");
        prop_assert_eq!(parsed, f64::from(value));
    }
}
