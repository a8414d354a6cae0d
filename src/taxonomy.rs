//! The feature taxonomy generator.
//!
//! Given F independent features and a model, this module computes the full
//! feature universe: the independent features themselves plus every derived
//! feature the model admits (or, and, not, or-not, and-not combinations),
//! together with the aggregate statistics of the product line.
//!
//! Feature names are canonical strings built once at construction:
//!
//! - independent: `f1`
//! - or: `f1 + f2`
//! - and: `f1 * f2`
//! - not: `!f1`
//! - or-not: `!f1 + !f2`
//! - and-not: `!f1 * !f2`

use num_bigint::BigUint;

use crate::combinatorics::{power2, sum_of_combinations, Combinations};
use crate::error::{Error, Result};
use crate::model::Model;
use crate::types::FeatureId;

/// Upper bound on F: past this, S = 2^F systems are no longer reasonably
/// enumerable and the per-system indices risk overflow.
pub const MAX_FEATURES: u16 = 20;

/// Builds the name of an or-feature over the given operand ids.
pub fn or_feature_name(ids: &[FeatureId]) -> String {
    let parts: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    parts.join(" + ")
}

/// Builds the name of an and-feature over the given operand ids.
pub fn and_feature_name(ids: &[FeatureId]) -> String {
    let parts: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    parts.join(" * ")
}

/// Builds the name of a not-feature.
pub fn not_feature_name(id: FeatureId) -> String {
    format!("!{}", id)
}

/// Builds the name of an or-not-feature over the given operand ids.
pub fn or_not_feature_name(ids: &[FeatureId]) -> String {
    let parts: Vec<String> = ids.iter().map(|id| format!("!{}", id)).collect();
    parts.join(" + ")
}

/// Builds the name of an and-not-feature over the given operand ids.
pub fn and_not_feature_name(ids: &[FeatureId]) -> String {
    let parts: Vec<String> = ids.iter().map(|id| format!("!{}", id)).collect();
    parts.join(" * ")
}

/// Aggregate statistics of one (F, model) product line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts {
    /// Number of independent features.
    pub f: u64,
    /// Number of or-features.
    pub o: u64,
    /// Number of and-features.
    pub a: u64,
    /// Number of not-features.
    pub n: u64,
    /// Number of or-not-features.
    pub on: u64,
    /// Number of and-not-features.
    pub an: u64,
    /// Number of inherently dependent features (O + A + N + ON + AN).
    pub df: u64,
    /// Total number of features (F + DF).
    pub t: u64,
    /// Number of systems (2^F).
    pub s: u64,
    /// Number of all possible set differences of systems (2^S).
    /// Exceeds u64 as soon as F >= 6, hence the big integer.
    pub d: BigUint,
}

/// The feature universe of one (F, model) pair.
///
/// All name lists are generated eagerly at construction and never mutated.
/// Composite categories iterate combination sizes k = 2..=F in lexicographic
/// combination order.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    model: Model,
    ids: Vec<FeatureId>,
    /// Operand tuples of every composite feature (k = 2..=F combinations of
    /// independent ids, lexicographic). Shared by the or/and/or-not/and-not
    /// categories.
    combos: Vec<Vec<FeatureId>>,
    counts: Counts,
    independent: Vec<String>,
    or: Vec<String>,
    and: Vec<String>,
    not: Vec<String>,
    or_not: Vec<String>,
    and_not: Vec<String>,
    all: Vec<String>,
}

impl Taxonomy {
    /// Computes the feature universe for `f` independent features under the
    /// given model.
    ///
    /// Errors with [`Error::NoFeatures`] for `f == 0` and
    /// [`Error::TooManyFeatures`] past [`MAX_FEATURES`].
    pub fn build(f: u16, model: Model) -> Result<Self> {
        if f == 0 {
            return Err(Error::NoFeatures);
        }
        if f > MAX_FEATURES {
            return Err(Error::TooManyFeatures(f));
        }

        let ids: Vec<FeatureId> = (1..=f).map(FeatureId::new).collect();

        let mut combos: Vec<Vec<FeatureId>> = Vec::new();
        for k in 2..=usize::from(f) {
            for combo in Combinations::new(usize::from(f), k)? {
                combos.push(combo.into_iter().map(|i| ids[i]).collect());
            }
        }

        let counts = Self::count(f, model);
        log::debug!(
            "taxonomy for F={} {}: T={}, S={}",
            f,
            model,
            counts.t,
            counts.s
        );

        let independent: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let or = if model.has_or() {
            combos.iter().map(|c| or_feature_name(c)).collect()
        } else {
            Vec::new()
        };
        let and = if model.has_and() {
            combos.iter().map(|c| and_feature_name(c)).collect()
        } else {
            Vec::new()
        };
        let not = if model.has_not() {
            ids.iter().map(|&id| not_feature_name(id)).collect()
        } else {
            Vec::new()
        };
        let or_not = if model.has_or_not() {
            combos.iter().map(|c| or_not_feature_name(c)).collect()
        } else {
            Vec::new()
        };
        let and_not = if model.has_and_not() {
            combos.iter().map(|c| and_not_feature_name(c)).collect()
        } else {
            Vec::new()
        };

        let mut all = Vec::with_capacity(counts.t as usize);
        for list in [&independent, &or, &and, &not, &or_not, &and_not] {
            all.extend(list.iter().cloned());
        }
        all.sort();

        Ok(Taxonomy {
            model,
            ids,
            combos,
            counts,
            independent,
            or,
            and,
            not,
            or_not,
            and_not,
            all,
        })
    }

    fn count(f: u16, model: Model) -> Counts {
        let f = u64::from(f);
        let composite = || sum_of_combinations(f, 2);
        let o = if model.has_or() { composite() } else { 0 };
        let a = if model.has_and() { composite() } else { 0 };
        let n = if model.has_not() { f } else { 0 };
        let on = if model.has_or_not() { composite() } else { 0 };
        let an = if model.has_and_not() { composite() } else { 0 };
        let df = o + a + n + on + an;
        let s = power2(f);
        let d = BigUint::from(2u32).pow(s as u32);
        Counts {
            f,
            o,
            a,
            n,
            on,
            an,
            df,
            t: f + df,
            s,
            d,
        }
    }

    /// The model this taxonomy was built for.
    pub fn model(&self) -> Model {
        self.model
    }

    /// The independent feature ids, 1..=F in order.
    pub fn ids(&self) -> &[FeatureId] {
        &self.ids
    }

    /// Aggregate counts.
    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Operand tuples of the composite features (k = 2..=F, lexicographic).
    pub fn combos(&self) -> &[Vec<FeatureId>] {
        &self.combos
    }

    /// Independent feature names.
    pub fn independent_features(&self) -> &[String] {
        &self.independent
    }

    /// Or-feature names (empty unless the model has them).
    pub fn or_features(&self) -> &[String] {
        &self.or
    }

    /// And-feature names (empty unless the model has them).
    pub fn and_features(&self) -> &[String] {
        &self.and
    }

    /// Not-feature names (empty unless the model has them).
    pub fn not_features(&self) -> &[String] {
        &self.not
    }

    /// Or-not-feature names (empty unless the model has them).
    pub fn or_not_features(&self) -> &[String] {
        &self.or_not
    }

    /// And-not-feature names (empty unless the model has them).
    pub fn and_not_features(&self) -> &[String] {
        &self.and_not
    }

    /// All feature names, sorted lexicographically.
    pub fn all_features(&self) -> &[String] {
        &self.all
    }

    /// Returns the defining feature set of the system whose present
    /// independent features are the set bits of `mask` (bit i set means
    /// feature i+1 is present), sorted lexicographically.
    ///
    /// The defining set is the union of:
    /// - the present independent features,
    /// - every or-feature whose operands intersect the present set,
    /// - every and-feature whose operands are a subset of the present set,
    /// - a not-feature per absent independent feature,
    /// - or-not/and-not features computed the same way over the absent set.
    pub fn system_features(&self, mask: u64) -> Vec<String> {
        let present = |id: FeatureId| mask & (1 << id.bit()) != 0;
        let absent = |id: FeatureId| !present(id);

        let mut result = Vec::new();
        for &id in &self.ids {
            if present(id) {
                result.push(id.to_string());
            }
        }
        if self.model.has_or() {
            for combo in &self.combos {
                if combo.iter().any(|&id| present(id)) {
                    result.push(or_feature_name(combo));
                }
            }
        }
        if self.model.has_and() {
            for combo in &self.combos {
                if combo.iter().all(|&id| present(id)) {
                    result.push(and_feature_name(combo));
                }
            }
        }
        if self.model.has_not() {
            for &id in &self.ids {
                if absent(id) {
                    result.push(not_feature_name(id));
                }
            }
        }
        if self.model.has_or_not() {
            for combo in &self.combos {
                if combo.iter().any(|&id| absent(id)) {
                    result.push(or_not_feature_name(combo));
                }
            }
        }
        if self.model.has_and_not() {
            for combo in &self.combos {
                if combo.iter().all(|&id| absent(id)) {
                    result.push(and_not_feature_name(combo));
                }
            }
        }
        result.sort();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn taxonomy(f: u16, m: u16) -> Taxonomy {
        Taxonomy::build(f, Model::new(m).unwrap()).unwrap()
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let m = Model::new(1).unwrap();
        assert_eq!(Taxonomy::build(0, m).unwrap_err(), Error::NoFeatures);
        assert_eq!(Taxonomy::build(21, m).unwrap_err(), Error::TooManyFeatures(21));
    }

    #[test]
    fn test_combos_lexicographic() {
        let t = taxonomy(3, 1);
        let combos: Vec<Vec<u16>> = t
            .combos()
            .iter()
            .map(|c| c.iter().map(|id| id.id()).collect())
            .collect();
        assert_eq!(
            combos,
            vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_names() {
        let ids = [FeatureId::new(1), FeatureId::new(2), FeatureId::new(3)];
        assert_eq!(or_feature_name(&ids), "f1 + f2 + f3");
        assert_eq!(and_feature_name(&ids[..2]), "f1 * f2");
        assert_eq!(not_feature_name(ids[0]), "!f1");
        assert_eq!(or_not_feature_name(&ids[..2]), "!f1 + !f2");
        assert_eq!(and_not_feature_name(&ids), "!f1 * !f2 * !f3");
    }

    #[test]
    fn test_counts_model8() {
        // M8 has or, and, not; no or-not/and-not.
        let t = taxonomy(2, 8);
        let c = t.counts();
        assert_eq!(c.f, 2);
        assert_eq!(c.o, 1);
        assert_eq!(c.a, 1);
        assert_eq!(c.n, 2);
        assert_eq!(c.on, 0);
        assert_eq!(c.an, 0);
        assert_eq!(c.df, 4);
        assert_eq!(c.t, 6);
        assert_eq!(c.s, 4);
        assert_eq!(c.d, BigUint::from(16u32));
    }

    #[test]
    fn test_counts_identity_for_all_models() {
        for m in 1..=19 {
            for f in 1..=5 {
                let t = taxonomy(f, m);
                let c = t.counts();
                assert_eq!(c.t, c.f + c.o + c.a + c.n + c.on + c.an, "F={} M{}", f, m);
                assert_eq!(c.df, c.t - c.f);
                assert_eq!(c.s, 1 << f);
                assert_eq!(c.d, BigUint::from(2u32).pow(c.s as u32));
                assert_eq!(t.all_features().len() as u64, c.t);
            }
        }
    }

    #[test]
    fn test_category_lists_model19() {
        let t = taxonomy(3, 19);
        assert_eq!(t.independent_features(), &["f1", "f2", "f3"]);
        assert_eq!(
            t.or_features(),
            &["f1 + f2", "f1 + f3", "f2 + f3", "f1 + f2 + f3"]
        );
        assert_eq!(
            t.and_features(),
            &["f1 * f2", "f1 * f3", "f2 * f3", "f1 * f2 * f3"]
        );
        assert_eq!(t.not_features(), &["!f1", "!f2", "!f3"]);
        assert_eq!(
            t.or_not_features(),
            &["!f1 + !f2", "!f1 + !f3", "!f2 + !f3", "!f1 + !f2 + !f3"]
        );
        assert_eq!(
            t.and_not_features(),
            &["!f1 * !f2", "!f1 * !f3", "!f2 * !f3", "!f1 * !f2 * !f3"]
        );
    }

    #[test]
    fn test_inactive_categories_are_empty() {
        let t = taxonomy(3, 1);
        assert!(t.or_features().is_empty());
        assert!(t.and_features().is_empty());
        assert!(t.not_features().is_empty());
        assert!(t.or_not_features().is_empty());
        assert!(t.and_not_features().is_empty());
        assert_eq!(t.all_features().len(), 3);
    }

    #[test]
    fn test_system_features_model8() {
        let t = taxonomy(2, 8);
        // Mask 0: nothing present, only the not-features.
        assert_eq!(t.system_features(0), &["!f1", "!f2"]);
        // Mask 0b11: everything present.
        assert_eq!(
            t.system_features(3),
            &["f1", "f1 * f2", "f1 + f2", "f2"]
        );
        // Mask 0b01: f1 present; or-feature fires on intersection,
        // and-feature needs both.
        assert_eq!(t.system_features(1), &["!f2", "f1", "f1 + f2"]);
    }

    #[test]
    fn test_system_features_are_sorted_and_pure() {
        let t = taxonomy(3, 19);
        for mask in 0..8 {
            let a = t.system_features(mask);
            let mut sorted = a.clone();
            sorted.sort();
            assert_eq!(a, sorted);
            assert_eq!(a, t.system_features(mask));
        }
    }
}
