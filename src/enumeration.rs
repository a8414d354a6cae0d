//! Isolation by membership partition.
//!
//! For each feature, one scan over all S systems splits them into the
//! systems that contain the feature (intersection part) and the systems
//! that do not (union part). By construction this partition's evaluation is
//! exactly the feature's membership set, so the strategy always succeeds —
//! no validity check is needed. O(T·S).

use std::collections::BTreeMap;

use crate::difference::DifferenceExpr;
use crate::error::Result;
use crate::isolation::Isolate;
use crate::systems::Systems;
use crate::taxonomy::Taxonomy;

/// The membership-partition strategy.
pub struct Enumeration<'a> {
    taxonomy: &'a Taxonomy,
    systems: &'a Systems,
}

impl<'a> Enumeration<'a> {
    /// Binds the strategy to a taxonomy and its enumerated systems.
    pub fn new(taxonomy: &'a Taxonomy, systems: &'a Systems) -> Self {
        Enumeration { taxonomy, systems }
    }

    /// Partitions all systems by membership of the given feature.
    fn partition(&self, feature: &str) -> DifferenceExpr {
        let mut difference = DifferenceExpr::default();
        for (id, set) in self.systems.iter() {
            if set.contains(feature) {
                difference.intersections.insert(id.to_string());
            } else {
                difference.unions.insert(id.to_string());
            }
        }
        difference
    }
}

impl Isolate for Enumeration<'_> {
    fn isolate(&self) -> Result<BTreeMap<String, DifferenceExpr>> {
        log::debug!(
            "partitioning {} systems for {} features",
            self.systems.len(),
            self.taxonomy.all_features().len()
        );
        let mut result = BTreeMap::new();
        for feature in self.taxonomy.all_features() {
            result.insert(feature.clone(), self.partition(feature));
        }
        Ok(result)
    }
}
