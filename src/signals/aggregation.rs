//! Per-category signal averaging within a cluster

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::LocationRecord;
use crate::signals::parser::{parse_signal, SignalSample};

/// Averages signal strength by category
pub struct SignalAggregator;

impl SignalAggregator {
    /// Mean parsed signal per category for the given cluster members.
    ///
    /// Every category that appears among the members gets an entry. A
    /// category whose members all have unparseable signals averages to 0.
    pub fn aggregate_by_category(members: &[LocationRecord]) -> BTreeMap<String, f64> {
        let mut samples: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

        for member in members {
            let entry = samples.entry(member.category.as_str()).or_insert((0.0, 0));
            match parse_signal(&member.signal_strength) {
                SignalSample::Parsed(value) => {
                    entry.0 += value;
                    entry.1 += 1;
                }
                SignalSample::Excluded => {
                    debug!(
                        device_id = %member.device_id,
                        signal_strength = %member.signal_strength.display_text(),
                        "Skipping invalid signal_strength"
                    );
                }
            }
        }

        samples
            .into_iter()
            .map(|(category, (sum, count))| {
                let avg = if count > 0 { sum / count as f64 } else { 0.0 };
                (category.to_string(), avg)
            })
            .collect()
    }
}
