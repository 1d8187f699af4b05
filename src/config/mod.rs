//! Runtime configuration, passed explicitly into the pipeline.

use std::env;

use thiserror::Error;

use crate::clustering::DEFAULT_THRESHOLD_KM;
use crate::geo::km_to_meters;

/// Row cap applied before validation
pub const DEFAULT_MAX_RECORDS: usize = 1029;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be positive and finite, got {value}")]
    NotPositive { var: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum pairwise distance inside a cluster, in kilometers
    pub threshold_km: f64,
    pub max_records: usize,
    /// Deployment environment (`APP_ENV`), selects the log format
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_km: DEFAULT_THRESHOLD_KM,
            max_records: DEFAULT_MAX_RECORDS,
            environment: "sandbox".to_string(),
        }
    }
}

impl Config {
    /// Build from `CLUSTER_THRESHOLD_KM`, `CLUSTER_MAX_RECORDS` and `APP_ENV`.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("CLUSTER_THRESHOLD_KM") {
            let value = raw.trim().parse::<f64>().map_err(|_| ConfigError::NotANumber {
                var: "CLUSTER_THRESHOLD_KM",
                value: raw.clone(),
            })?;
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive {
                    var: "CLUSTER_THRESHOLD_KM",
                    value,
                });
            }
            config.threshold_km = value;
        }

        if let Some(raw) = lookup("CLUSTER_MAX_RECORDS") {
            config.max_records = raw.trim().parse::<usize>().map_err(|_| ConfigError::NotANumber {
                var: "CLUSTER_MAX_RECORDS",
                value: raw.clone(),
            })?;
        }

        if let Some(environment) = lookup("APP_ENV") {
            config.environment = environment;
        }

        Ok(config)
    }

    pub fn threshold_meters(&self) -> f64 {
        km_to_meters(self.threshold_km)
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}
