//! Interpretation of raw signal values as numbers

use serde_json::Value;

use crate::models::SignalValue;

/// Outcome of reading one member's signal strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalSample {
    Parsed(f64),
    Excluded,
}

impl SignalSample {
    pub fn value(self) -> Option<f64> {
        match self {
            SignalSample::Parsed(v) => Some(v),
            SignalSample::Excluded => None,
        }
    }
}

/// Read a raw signal value as a finite real number.
///
/// JSON numbers are taken as-is, strings are trimmed and parsed. Everything
/// else, and any NaN or infinite result, is `Excluded`.
pub fn parse_signal(value: &SignalValue) -> SignalSample {
    let parsed = match value.raw() {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => SignalSample::Parsed(v),
        _ => SignalSample::Excluded,
    }
}
