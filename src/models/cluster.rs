use serde::Serialize;

use crate::models::location::LocationRecord;

/// An ordered group of records that are pairwise within the grouping
/// threshold.
///
/// Only the grouping pass builds clusters, so the pairwise-distance
/// invariant holds for every instance. Centroid and radius are derived on
/// demand (see [`crate::geo::geometry`]) and are not stored here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cluster {
    members: Vec<LocationRecord>,
}

impl Cluster {
    pub(crate) fn new(members: Vec<LocationRecord>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[LocationRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
