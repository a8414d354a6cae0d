//! Set-difference expressions over systems.
//!
//! A difference expression splits the S systems into two disjoint parts:
//! the *intersection part* (whose feature sets are intersected) and the
//! *union part* (whose feature sets are united). Its value is
//! `(∩ intersections) \ (∪ unions)`. A *valid* expression evaluates to
//! exactly one feature name, thereby isolating that feature.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::Result;
use crate::systems::Systems;
use crate::types::{DifferenceId, SystemId};

/// A set-difference expression: the two disjoint parts of a system split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifferenceExpr {
    /// Names of the systems whose feature sets are intersected
    /// (the left operand of the set difference).
    pub intersections: BTreeSet<String>,
    /// Names of the systems whose feature sets are united
    /// (the right operand of the set difference).
    pub unions: BTreeSet<String>,
}

impl DifferenceExpr {
    /// Decodes a difference id into the split it denotes: bit `p` set puts
    /// system `p + 1` into the intersection part, clear into the union part.
    pub fn from_id(id: DifferenceId, num_systems: u64) -> Self {
        let mut expr = DifferenceExpr::default();
        for position in 0..num_systems {
            let name = SystemId::from_mask(position).to_string();
            if id & (1 << position) != 0 {
                expr.intersections.insert(name);
            } else {
                expr.unions.insert(name);
            }
        }
        expr
    }

    /// Evaluates the intersection part: the fold of set-intersection over
    /// the member systems' feature sets. Empty part yields the empty set;
    /// the fold short-circuits once it hits the empty set.
    pub fn evaluate_intersections(&self, systems: &Systems) -> Result<BTreeSet<String>> {
        let mut names = self.intersections.iter();
        let mut result = match names.next() {
            Some(first) => systems.by_name(first)?.clone(),
            None => return Ok(BTreeSet::new()),
        };
        for name in names {
            let features = systems.by_name(name)?;
            result = result.intersection(features).cloned().collect();
            if result.is_empty() {
                break;
            }
        }
        Ok(result)
    }

    /// Evaluates the union part: the fold of set-union over the member
    /// systems' feature sets.
    pub fn evaluate_unions(&self, systems: &Systems) -> Result<BTreeSet<String>> {
        let mut result = BTreeSet::new();
        for name in &self.unions {
            result.extend(systems.by_name(name)?.iter().cloned());
        }
        Ok(result)
    }

    /// Evaluates the whole expression:
    /// `(∩ intersections) \ (∪ unions)`.
    pub fn evaluate(&self, systems: &Systems) -> Result<BTreeSet<String>> {
        let intersections = self.evaluate_intersections(systems)?;
        let unions = self.evaluate_unions(systems)?;
        Ok(intersections.difference(&unions).cloned().collect())
    }
}

fn write_part(
    f: &mut fmt::Formatter<'_>,
    part: &BTreeSet<String>,
    operator: &str,
) -> fmt::Result {
    write!(f, "( ")?;
    for (i, name) in part.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", operator)?;
        }
        write!(f, "{}", name)?;
    }
    write!(f, " )")
}

impl fmt::Display for DifferenceExpr {
    /// The exact textual contract consumed by external reporting:
    /// `( S1 & S2 ) \ ( S3 | S4 )`. An empty part renders as `(  )`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_part(f, &self.intersections, "&")?;
        write!(f, " \\ ")?;
        write_part(f, &self.unions, "|")
    }
}

/// A valid difference expression together with the id that denotes it and
/// the feature it isolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDifference {
    /// The id whose bit pattern encodes the split.
    pub id: DifferenceId,
    /// Name of the isolated feature.
    pub feature: String,
    /// The isolating split.
    pub difference: DifferenceExpr,
}
