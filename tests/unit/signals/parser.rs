//! Unit tests for signal value parsing

use serde_json::json;
use signalmap::models::SignalValue;
use signalmap::signals::{parse_signal, SignalSample};

fn parse(value: serde_json::Value) -> SignalSample {
    parse_signal(&SignalValue::from(value))
}

#[test]
fn test_numbers_parse() {
    assert_eq!(parse(json!(-71)), SignalSample::Parsed(-71.0));
    assert_eq!(parse(json!(12.5)), SignalSample::Parsed(12.5));
}

#[test]
fn test_numeric_strings_parse_after_trim() {
    assert_eq!(parse(json!("-65")), SignalSample::Parsed(-65.0));
    assert_eq!(parse(json!("  -65.5 ")), SignalSample::Parsed(-65.5));
}

#[test]
fn test_non_numeric_values_are_excluded() {
    for value in [
        json!("n/a"),
        json!(""),
        json!(null),
        json!(true),
        json!([1, 2]),
        json!({"dbm": -70}),
        json!("NaN"),
        json!("inf"),
    ] {
        assert_eq!(parse(value.clone()), SignalSample::Excluded, "value {}", value);
    }
}

#[test]
fn test_missing_value_is_excluded() {
    assert_eq!(parse_signal(&SignalValue::default()), SignalSample::Excluded);
    assert_eq!(SignalSample::Excluded.value(), None);
    assert_eq!(SignalSample::Parsed(3.0).value(), Some(3.0));
}
