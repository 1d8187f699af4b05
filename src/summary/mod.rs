//! Per-cluster payload for the map renderer and the summary view.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geo::{bounding_radius_m, centroid, Coordinate};
use crate::models::{Cluster, LocationRecord};
use crate::signals::{marker_color, SignalAggregator};

/// One cluster member as a map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberView {
    pub device_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub signal_strength: String,
    pub category: String,
    pub marker_color: &'static str,
}

impl From<&LocationRecord> for MemberView {
    fn from(record: &LocationRecord) -> Self {
        Self {
            device_id: record.device_id.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            signal_strength: record.signal_strength.display_text(),
            category: record.category.clone(),
            marker_color: marker_color(&record.category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    /// 1-based position in the grouping output
    pub index: usize,
    pub centroid: Coordinate,
    pub radius_m: f64,
    pub member_count: usize,
    pub members: Vec<MemberView>,
    pub signal_by_category: BTreeMap<String, f64>,
}

/// Summarize a cluster; `None` only for an empty cluster
pub fn summarize(index: usize, cluster: &Cluster) -> Option<ClusterSummary> {
    let center = centroid(cluster.members())?;

    Some(ClusterSummary {
        index,
        centroid: center,
        radius_m: bounding_radius_m(&center, cluster.members()),
        member_count: cluster.len(),
        members: cluster.iter().map(MemberView::from).collect(),
        signal_by_category: SignalAggregator::aggregate_by_category(cluster.members()),
    })
}

/// Summaries for every cluster, numbered from 1
pub fn summarize_all(clusters: &[Cluster]) -> Vec<ClusterSummary> {
    clusters
        .iter()
        .enumerate()
        .filter_map(|(i, cluster)| summarize(i + 1, cluster))
        .collect()
}
