use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geo::Coordinate;

/// Signal strength exactly as it arrived from the data source.
///
/// Interpretation as a number is deferred to the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalValue(pub Value);

impl SignalValue {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Text form used in marker popups
    pub fn display_text(&self) -> String {
        match &self.0 {
            Value::Null => "n/a".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<f64> for SignalValue {
    fn from(value: f64) -> Self {
        Self(Value::from(value))
    }
}

impl From<i64> for SignalValue {
    fn from(value: i64) -> Self {
        Self(Value::from(value))
    }
}

impl From<&str> for SignalValue {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

impl From<Value> for SignalValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A validated device location. Coordinates are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub device_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub signal_strength: SignalValue,
    pub category: String,
}

impl LocationRecord {
    pub fn new(device_id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            device_id: device_id.into(),
            latitude,
            longitude,
            signal_strength: SignalValue::default(),
            category: String::new(),
        }
    }

    pub fn with_signal(mut self, signal_strength: impl Into<SignalValue>) -> Self {
        self.signal_strength = signal_strength.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Distance to another record in meters
    pub fn distance_to(&self, other: &LocationRecord) -> f64 {
        self.coordinate().distance_to(&other.coordinate())
    }
}

/// One row as handed over by the fetch layer, before validation.
///
/// Coordinates may be missing, numeric, or numeric text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLocationRow {
    #[serde(default)]
    pub device_id: Value,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
    #[serde(default)]
    pub signal_strength: SignalValue,
    #[serde(default)]
    pub apn_type: Option<String>,
}

impl RawLocationRow {
    /// Device id as text, whatever JSON type the source used
    pub fn device_id_text(&self) -> String {
        match &self.device_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
