//! Turning fetched rows into records the clustering core accepts

use serde_json::Value;
use tracing::{info, warn};

use crate::ingest::error::ValidationError;
use crate::models::{LocationRecord, RawLocationRow};

/// Valid records in input order plus the number of rows dropped
#[derive(Debug, Clone, Default)]
pub struct ValidatedBatch {
    pub records: Vec<LocationRecord>,
    pub rejected: usize,
}

fn parse_coordinate(field: &'static str, value: Option<&Value>) -> Result<f64, ValidationError> {
    let value = match value {
        None | Some(Value::Null) => return Err(ValidationError::MissingCoordinate(field)),
        Some(v) => v,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ValidationError::InvalidCoordinate {
        field,
        value: value.to_string(),
    })
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

/// Validate one row. A missing category becomes the empty string.
pub fn validate_row(row: &RawLocationRow) -> Result<LocationRecord, ValidationError> {
    let latitude = parse_coordinate("latitude", row.latitude.as_ref())?;
    let longitude = parse_coordinate("longitude", row.longitude.as_ref())?;
    let latitude = check_range("latitude", latitude, 90.0)?;
    let longitude = check_range("longitude", longitude, 180.0)?;

    Ok(LocationRecord {
        device_id: row.device_id_text(),
        latitude,
        longitude,
        signal_strength: row.signal_strength.clone(),
        category: row.apn_type.clone().unwrap_or_default(),
    })
}

/// Validate a batch, keeping valid rows in their original order
pub fn validate_rows(rows: &[RawLocationRow]) -> ValidatedBatch {
    let mut batch = ValidatedBatch::default();

    for row in rows {
        match validate_row(row) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                batch.rejected += 1;
                warn!(
                    device_id = %row.device_id_text(),
                    error = %e,
                    "Skipping invalid row"
                );
            }
        }
    }

    info!(
        valid = batch.records.len(),
        rejected = batch.rejected,
        "Validation: {} valid locations processed, {} invalid rows skipped",
        batch.records.len(),
        batch.rejected
    );

    batch
}
