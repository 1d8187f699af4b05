//! Validate, group and summarize in one call

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::clustering::ProximityGrouper;
use crate::config::Config;
use crate::ingest::validate_rows;
use crate::models::{Cluster, LocationRecord, RawLocationRow};
use crate::summary::{summarize_all, ClusterSummary};

/// Everything the renderer and summary view need from one run
#[derive(Debug, Clone, Serialize)]
pub struct ClusterReport {
    pub generated_at: DateTime<Utc>,
    pub threshold_km: f64,
    /// Rows supplied, including any past `max_records`
    pub total_rows: usize,
    /// Rows ignored because of `max_records`
    pub truncated_rows: usize,
    pub valid_records: usize,
    pub rejected_rows: usize,
    pub clustered_records: usize,
    pub unclustered_records: usize,
    pub clusters: Vec<ClusterSummary>,
}

pub struct ClusterPipeline {
    config: Config,
    grouper: ProximityGrouper,
}

impl ClusterPipeline {
    pub fn new(config: Config) -> Self {
        let grouper = ProximityGrouper::from_config(&config);
        Self { config, grouper }
    }

    /// Run on raw rows. Rows past `max_records` are ignored.
    pub fn run(&self, rows: &[RawLocationRow]) -> ClusterReport {
        if rows.is_empty() {
            warn!("ClusterPipeline: no rows supplied");
        }

        let total_rows = rows.len();
        let rows = if rows.len() > self.config.max_records {
            warn!(
                total = rows.len(),
                max_records = self.config.max_records,
                "ClusterPipeline: truncating input to {} rows",
                self.config.max_records
            );
            &rows[..self.config.max_records]
        } else {
            rows
        };

        let batch = validate_rows(rows);
        let mut report = self.run_records(&batch.records);
        report.total_rows = total_rows;
        report.truncated_rows = total_rows - rows.len();
        report.rejected_rows = batch.rejected;
        report
    }

    /// Run on records that are already validated
    pub fn run_records(&self, records: &[LocationRecord]) -> ClusterReport {
        let clusters = self.group(records);
        let clustered: usize = clusters.iter().map(Cluster::len).sum();

        info!(
            records = records.len(),
            clusters = clusters.len(),
            clustered = clustered,
            "ClusterPipeline: {} clusters from {} records",
            clusters.len(),
            records.len()
        );

        ClusterReport {
            generated_at: Utc::now(),
            threshold_km: self.config.threshold_km,
            total_rows: records.len(),
            truncated_rows: 0,
            valid_records: records.len(),
            rejected_rows: 0,
            clustered_records: clustered,
            unclustered_records: records.len() - clustered,
            clusters: summarize_all(&clusters),
        }
    }

    /// Grouping only, for callers that build their own summaries
    pub fn group(&self, records: &[LocationRecord]) -> Vec<Cluster> {
        self.grouper.group(records)
    }
}
