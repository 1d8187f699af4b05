use thiserror::Error;

/// Why a raw row was rejected at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing {0}")]
    MissingCoordinate(&'static str),

    #[error("{field} is not a number: {value}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
