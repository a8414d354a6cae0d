//! Isolation by closed-form bitmask arithmetic.
//!
//! Every feature is represented directly as an S-bit value — bit p set means
//! system p+1 contains the feature — computed without materializing any
//! system:
//!
//! - independent feature f: blocks of 2^(f−1) bits alternating 0/1 across
//!   the S systems, starting with a zero block;
//! - or-feature: bitwise OR of its operands' values;
//! - and-feature: bitwise AND;
//! - not-feature: complement of the independent value, masked to S bits;
//! - or-not/and-not: OR/AND over the already-complemented not-values.
//!
//! The isolating difference expression is read directly off the value: set
//! bits name the intersection part, clear bits the union part. Equivalent
//! to the exhaustive search's output, in O(T·S) time and O(T) space.

use std::collections::BTreeMap;

use crate::bitstring::Bitstring;
use crate::combinatorics::ceil_div;
use crate::difference::DifferenceExpr;
use crate::error::Result;
use crate::isolation::Isolate;
use crate::taxonomy::{
    and_feature_name, and_not_feature_name, not_feature_name, or_feature_name,
    or_not_feature_name, Taxonomy,
};
use crate::types::{FeatureId, SystemId};

/// The closed-form bitmask strategy.
pub struct ClosedForm {
    /// Width of every value: one bit per system.
    s: usize,
    /// All (feature name, membership value) pairs in category order:
    /// independent, or, and, not, or-not, and-not.
    features: Vec<(String, Bitstring)>,
}

impl ClosedForm {
    /// Computes the membership value of every feature of the taxonomy.
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let s = taxonomy.counts().s as usize;
        log::debug!(
            "computing {} closed-form bitstrings of {} bits",
            taxonomy.counts().t,
            s
        );

        let independent: Vec<Bitstring> = taxonomy
            .ids()
            .iter()
            .map(|&id| Self::independent_value(id, s))
            .collect();
        let nots: Vec<Bitstring> = independent.iter().map(Bitstring::complement).collect();

        // Operand tuples hold 1-based ids; the value tables are 0-based.
        let value = |id: FeatureId| &independent[id.bit() as usize];
        let not_value = |id: FeatureId| &nots[id.bit() as usize];

        let mut features = Vec::with_capacity(taxonomy.counts().t as usize);
        for (&id, bits) in taxonomy.ids().iter().zip(&independent) {
            features.push((id.to_string(), bits.clone()));
        }
        if taxonomy.model().has_or() {
            for combo in taxonomy.combos() {
                let bits = combo
                    .iter()
                    .map(|&id| value(id))
                    .fold(Bitstring::zeros(s), |acc, b| &acc | b);
                features.push((or_feature_name(combo), bits));
            }
        }
        if taxonomy.model().has_and() {
            for combo in taxonomy.combos() {
                let bits = combo
                    .iter()
                    .map(|&id| value(id))
                    .fold(Bitstring::ones(s), |acc, b| &acc & b);
                features.push((and_feature_name(combo), bits));
            }
        }
        if taxonomy.model().has_not() {
            for (&id, bits) in taxonomy.ids().iter().zip(&nots) {
                features.push((not_feature_name(id), bits.clone()));
            }
        }
        if taxonomy.model().has_or_not() {
            for combo in taxonomy.combos() {
                let bits = combo
                    .iter()
                    .map(|&id| not_value(id))
                    .fold(Bitstring::zeros(s), |acc, b| &acc | b);
                features.push((or_not_feature_name(combo), bits));
            }
        }
        if taxonomy.model().has_and_not() {
            for combo in taxonomy.combos() {
                let bits = combo
                    .iter()
                    .map(|&id| not_value(id))
                    .fold(Bitstring::ones(s), |acc, b| &acc & b);
                features.push((and_not_feature_name(combo), bits));
            }
        }

        ClosedForm { s, features }
    }

    /// The closed-form membership value of an independent feature: blocks
    /// of `2^(f-1)` bits alternating 0/1, starting with zeros (system 1,
    /// the empty system, contains no independent feature).
    fn independent_value(id: FeatureId, s: usize) -> Bitstring {
        let stride = 1usize << id.bit();
        let mut bits = Bitstring::zeros(s);
        for p in 0..s {
            if (p / stride) % 2 == 1 {
                bits.set(p);
            }
        }
        bits
    }

    /// Arithmetic membership query: whether system `s` contains independent
    /// feature `f`, computed in constant space from the ids alone
    /// (no value is materialized).
    pub fn membership_bit(feature: FeatureId, system: SystemId) -> bool {
        let stride = 1u64 << feature.bit();
        ceil_div(system.index(), stride) % 2 == 0
    }

    /// Width of the values: one bit per system.
    pub fn num_systems(&self) -> usize {
        self.s
    }

    /// All (feature name, membership value) pairs in category order.
    pub fn features(&self) -> &[(String, Bitstring)] {
        &self.features
    }

    /// Reads the isolating difference expression off a membership value:
    /// bit p set puts system p+1 into the intersection part.
    pub fn difference(&self, bits: &Bitstring) -> DifferenceExpr {
        let mut expr = DifferenceExpr::default();
        for p in 0..self.s {
            let name = SystemId::from_mask(p as u64).to_string();
            if bits.get(p) {
                expr.intersections.insert(name);
            } else {
                expr.unions.insert(name);
            }
        }
        expr
    }

    /// All isolating differences, ordered by the numeric value of the
    /// membership bitstring (the same order the exhaustive search reports
    /// its ids in).
    pub fn differences(&self) -> Vec<(String, DifferenceExpr)> {
        let mut entries: Vec<&(String, Bitstring)> = self.features.iter().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        entries
            .into_iter()
            .map(|(name, bits)| (name.clone(), self.difference(bits)))
            .collect()
    }
}

impl Isolate for ClosedForm {
    fn isolate(&self) -> Result<BTreeMap<String, DifferenceExpr>> {
        Ok(self
            .features
            .iter()
            .map(|(name, bits)| (name.clone(), self.difference(bits)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use test_log::test;

    fn closed_form(f: u16, m: u16) -> ClosedForm {
        let taxonomy = Taxonomy::build(f, Model::new(m).unwrap()).unwrap();
        ClosedForm::new(&taxonomy)
    }

    fn value_of(cf: &ClosedForm, name: &str) -> Bitstring {
        cf.features()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.clone())
            .unwrap_or_else(|| panic!("no feature {}", name))
    }

    #[test]
    fn test_independent_stride_pattern() {
        // F=3: f2 has stride 2 across 8 systems; present in S3, S4, S7, S8.
        let cf = closed_form(3, 1);
        let f2 = value_of(&cf, "f2");
        assert_eq!(f2.to_string(), "11001100");
        assert_eq!(f2.iter_ones().collect::<Vec<_>>(), vec![2, 3, 6, 7]);

        let f1 = value_of(&cf, "f1");
        assert_eq!(f1.to_string(), "10101010");
        let f3 = value_of(&cf, "f3");
        assert_eq!(f3.to_string(), "11110000");
    }

    #[test]
    fn test_known_values_model8() {
        let cf = closed_form(2, 8);
        assert_eq!(value_of(&cf, "f1").to_string(), "1010");
        assert_eq!(value_of(&cf, "f2").to_string(), "1100");
        assert_eq!(value_of(&cf, "f1 + f2").to_string(), "1110");
        assert_eq!(value_of(&cf, "f1 * f2").to_string(), "1000");
        assert_eq!(value_of(&cf, "!f1").to_string(), "0101");
        assert_eq!(value_of(&cf, "!f2").to_string(), "0011");
    }

    #[test]
    fn test_not_is_masked_complement() {
        let cf = closed_form(3, 19);
        for f in 1..=3u16 {
            let value = value_of(&cf, &format!("f{}", f));
            let not = value_of(&cf, &format!("!f{}", f));
            assert_eq!(not, value.complement());
            assert_eq!(not.complement(), value);
            assert_eq!(not.len(), 8);
        }
    }

    #[test]
    fn test_category_order_and_total() {
        let cf = closed_form(2, 19);
        let names: Vec<_> = cf.features().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(
            names,
            &["f1", "f2", "f1 + f2", "f1 * f2", "!f1", "!f2", "!f1 + !f2", "!f1 * !f2"]
        );
    }

    #[test]
    fn test_membership_bit_matches_value() {
        let cf = closed_form(4, 1);
        for f in 1..=4u16 {
            let id = FeatureId::new(f);
            let value = value_of(&cf, &id.to_string());
            for p in 0..cf.num_systems() {
                let system = SystemId::from_mask(p as u64);
                assert_eq!(
                    ClosedForm::membership_bit(id, system),
                    value.get(p),
                    "f{} S{}",
                    f,
                    p + 1
                );
            }
        }
    }

    #[test]
    fn test_differences_ordered_by_value() {
        let cf = closed_form(2, 8);
        let differences = cf.differences();
        assert_eq!(differences.len(), 6);
        // Ascending numeric order of the membership values:
        // !f2=0011(3), !f1=0101(5), f1*f2=1000(8), f1=1010(10),
        // f2=1100(12), f1+f2=1110(14).
        let names: Vec<_> = differences.iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, &["!f2", "!f1", "f1 * f2", "f1", "f2", "f1 + f2"]);
    }

    #[test]
    fn test_difference_split() {
        let cf = closed_form(2, 8);
        let expr = cf.difference(&value_of(&cf, "f1"));
        assert_eq!(
            expr.intersections.iter().cloned().collect::<Vec<_>>(),
            &["S2", "S4"]
        );
        assert_eq!(
            expr.unions.iter().cloned().collect::<Vec<_>>(),
            &["S1", "S3"]
        );
    }
}
