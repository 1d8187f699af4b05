//! Greedy, order-sensitive mutual-distance grouping

use tracing::debug;

use crate::config::Config;
use crate::geo::{km_to_meters, DistanceMetric, Haversine};
use crate::models::{Cluster, LocationRecord};

pub const DEFAULT_THRESHOLD_KM: f64 = 30.0;

/// Groups records so that every pair inside a group is within the threshold.
///
/// Seeds are taken in input order and each seed gets exactly one left-to-right
/// scan over the still-unvisited records. A candidate joins only if it is
/// within range of every current member; rejected candidates are not
/// revisited in that scan. Groups of one are dropped. The result depends on
/// input order.
#[derive(Debug, Clone)]
pub struct ProximityGrouper<M = Haversine> {
    threshold_m: f64,
    metric: M,
}

impl ProximityGrouper<Haversine> {
    pub fn new(threshold_km: f64) -> Self {
        Self::with_metric(threshold_km, Haversine)
    }

    /// Haversine grouper using the configured threshold
    pub fn from_config(config: &Config) -> Self {
        Self {
            threshold_m: config.threshold_meters(),
            metric: Haversine,
        }
    }
}

impl Default for ProximityGrouper<Haversine> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_KM)
    }
}

impl<M: DistanceMetric> ProximityGrouper<M> {
    pub fn with_metric(threshold_km: f64, metric: M) -> Self {
        Self {
            threshold_m: km_to_meters(threshold_km),
            metric,
        }
    }

    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }

    fn within(&self, a: &LocationRecord, b: &LocationRecord) -> bool {
        self.metric.distance_m(&a.coordinate(), &b.coordinate()) <= self.threshold_m
    }

    /// Partition `records` into clusters of two or more mutually-near records
    pub fn group(&self, records: &[LocationRecord]) -> Vec<Cluster> {
        let mut visited = vec![false; records.len()];
        let mut clusters = Vec::new();
        let mut singletons = 0usize;

        // The seed is always the first unvisited index, so it only moves forward
        let mut seed = 0;
        while seed < records.len() {
            if visited[seed] {
                seed += 1;
                continue;
            }
            visited[seed] = true;
            let mut group = vec![seed];

            for candidate in (seed + 1)..records.len() {
                if visited[candidate] {
                    continue;
                }
                let fits = group
                    .iter()
                    .all(|&member| self.within(&records[candidate], &records[member]));
                if fits {
                    visited[candidate] = true;
                    group.push(candidate);
                }
            }

            if group.len() > 1 {
                let members = group.into_iter().map(|i| records[i].clone()).collect();
                clusters.push(Cluster::new(members));
            } else {
                singletons += 1;
            }
            seed += 1;
        }

        debug!(
            records = records.len(),
            clusters = clusters.len(),
            singletons = singletons,
            threshold_m = self.threshold_m,
            "ProximityGrouper: grouped {} records into {} clusters",
            records.len(),
            clusters.len()
        );

        clusters
    }
}

/// Group with the haversine metric and the given threshold in kilometers
pub fn group_by_proximity(records: &[LocationRecord], threshold_km: f64) -> Vec<Cluster> {
    ProximityGrouper::new(threshold_km).group(records)
}
