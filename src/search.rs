//! Isolation by exhaustive difference-id search.
//!
//! Walks every id e in 1..D−1 (D = 2^S), decodes its bit pattern into an
//! intersection/union split of the systems, evaluates the resulting set
//! difference, and keeps the ids whose evaluation isolates exactly one
//! feature. This is the brute-force reference strategy: O(D·S) = O(2^S·S),
//! usable only for small F. An evaluation yielding more than one feature is
//! a modeling inconsistency and aborts the analysis.

use std::collections::BTreeMap;

use crate::difference::{DifferenceExpr, FeatureDifference};
use crate::error::{Error, Result};
use crate::isolation::Isolate;
use crate::systems::Systems;
use crate::taxonomy::Taxonomy;
use crate::types::DifferenceId;

/// The exhaustive id-search strategy.
#[derive(Debug)]
pub struct ExhaustiveSearch<'a> {
    systems: &'a Systems,
    /// Number of possible splits, 2^S.
    d: DifferenceId,
}

impl<'a> ExhaustiveSearch<'a> {
    /// Binds the strategy to a taxonomy and its enumerated systems.
    ///
    /// Errors with [`Error::SearchSpaceTooLarge`] once S no longer fits the
    /// 128-bit id domain. The practical ceiling is much lower: the search
    /// walks 2^S ids.
    pub fn new(taxonomy: &'a Taxonomy, systems: &'a Systems) -> Result<Self> {
        let s = taxonomy.counts().s;
        if s >= 128 {
            return Err(Error::SearchSpaceTooLarge { s });
        }
        Ok(ExhaustiveSearch {
            systems,
            d: 1 << s,
        })
    }

    /// Number of possible difference ids (2^S).
    pub fn d(&self) -> DifferenceId {
        self.d
    }

    /// Evaluates every id in 1..D−1 and returns the valid differences in id
    /// order, each annotated with the feature it isolates.
    ///
    /// # Panics
    ///
    /// Panics if any evaluation yields more than one feature; a valid set
    /// difference isolates at most one.
    pub fn run(&self) -> Result<Vec<FeatureDifference>> {
        log::debug!("searching {} difference ids", self.d - 1);
        let num_systems = self.systems.len() as u64;
        let mut result = Vec::new();
        for id in 1..self.d {
            let difference = DifferenceExpr::from_id(id, num_systems);
            let evaluated = difference.evaluate(self.systems)?;
            match evaluated.len() {
                0 => {}
                1 => {
                    let feature = evaluated.into_iter().next().unwrap();
                    result.push(FeatureDifference {
                        id,
                        feature,
                        difference,
                    });
                }
                n => panic!(
                    "difference E{} isolates {} features, must be at most 1",
                    id, n
                ),
            }
        }
        log::debug!("{} valid differences found", result.len());
        Ok(result)
    }
}

impl Isolate for ExhaustiveSearch<'_> {
    fn isolate(&self) -> Result<BTreeMap<String, DifferenceExpr>> {
        let mut result = BTreeMap::new();
        for entry in self.run()? {
            result.insert(entry.feature, entry.difference);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use test_log::test;

    fn build(f: u16, m: u16) -> (Taxonomy, Systems) {
        let taxonomy = Taxonomy::build(f, Model::new(m).unwrap()).unwrap();
        let systems = Systems::enumerate(&taxonomy);
        (taxonomy, systems)
    }

    #[test]
    fn test_rejects_oversized_search_space() {
        let (taxonomy, systems) = build(7, 1);
        assert_eq!(
            ExhaustiveSearch::new(&taxonomy, &systems).unwrap_err(),
            Error::SearchSpaceTooLarge { s: 128 }
        );
    }

    #[test]
    fn test_search_space_size() {
        let (taxonomy, systems) = build(2, 8);
        let search = ExhaustiveSearch::new(&taxonomy, &systems).unwrap();
        assert_eq!(search.d(), 16);
    }

    #[test]
    fn test_one_valid_difference_per_feature() {
        let (taxonomy, systems) = build(2, 8);
        let search = ExhaustiveSearch::new(&taxonomy, &systems).unwrap();
        let differences = search.run().unwrap();
        // Every feature has exactly one valid difference: the id whose set
        // bits are the feature's membership set.
        assert_eq!(differences.len() as u64, taxonomy.counts().t);
        let mut features: Vec<_> = differences.iter().map(|d| d.feature.clone()).collect();
        features.sort();
        assert_eq!(features, taxonomy.all_features());
    }

    #[test]
    fn test_results_ordered_by_id() {
        let (taxonomy, systems) = build(2, 8);
        let search = ExhaustiveSearch::new(&taxonomy, &systems).unwrap();
        let differences = search.run().unwrap();
        let ids: Vec<_> = differences.iter().map(|d| d.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_known_ids_model8() {
        // F=2, M8: membership bitmasks read off the enumerated systems.
        //   f1        -> S2, S4 -> 0b1010 = 10
        //   f2        -> S3, S4 -> 0b1100 = 12
        //   f1 + f2   -> S2, S3, S4 -> 0b1110 = 14
        //   f1 * f2   -> S4 -> 0b1000 = 8
        //   !f1       -> S1, S3 -> 0b0101 = 5
        //   !f2       -> S1, S2 -> 0b0011 = 3
        let (taxonomy, systems) = build(2, 8);
        let search = ExhaustiveSearch::new(&taxonomy, &systems).unwrap();
        let by_feature: BTreeMap<String, DifferenceId> = search
            .run()
            .unwrap()
            .into_iter()
            .map(|d| (d.feature, d.id))
            .collect();
        assert_eq!(by_feature["f1"], 10);
        assert_eq!(by_feature["f2"], 12);
        assert_eq!(by_feature["f1 + f2"], 14);
        assert_eq!(by_feature["f1 * f2"], 8);
        assert_eq!(by_feature["!f1"], 5);
        assert_eq!(by_feature["!f2"], 3);
    }
}
