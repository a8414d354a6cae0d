//! The system enumerator.
//!
//! Enumerates all S = 2^F members of the product line as their defining
//! feature-name sets, eagerly and in mask order, and maps between 1-based
//! system names (`S1`..`S{S}`) and 0-based indices.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::taxonomy::Taxonomy;
use crate::types::SystemId;

/// The ordered, read-only collection of all systems of one product line.
#[derive(Debug, Clone)]
pub struct Systems {
    /// Defining feature sets, indexed by system mask (0-based).
    sets: Vec<BTreeSet<String>>,
}

impl Systems {
    /// Derives every system of the taxonomy's product line.
    pub fn enumerate(taxonomy: &Taxonomy) -> Self {
        let s = taxonomy.counts().s;
        log::debug!("enumerating {} systems", s);
        let sets = (0..s)
            .map(|mask| taxonomy.system_features(mask).into_iter().collect())
            .collect();
        Systems { sets }
    }

    /// Number of systems.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True only for the degenerate empty collection.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The defining feature set of the system at the given 0-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn features(&self, index: usize) -> &BTreeSet<String> {
        &self.sets[index]
    }

    /// Resolves a display name like `S3` to that system's feature set.
    pub fn by_name(&self, name: &str) -> Result<&BTreeSet<String>> {
        let index: u64 = name
            .strip_prefix('S')
            .and_then(|rest| rest.parse().ok())
            .ok_or_else(|| Error::UnknownSystem(name.to_string()))?;
        if index == 0 || index > self.sets.len() as u64 {
            return Err(Error::UnknownSystem(name.to_string()));
        }
        Ok(&self.sets[(index - 1) as usize])
    }

    /// The display name of the system at the given 0-based index.
    pub fn name(&self, index: usize) -> String {
        SystemId::from_mask(index as u64).to_string()
    }

    /// Iterates `(SystemId, feature set)` pairs in mask order.
    pub fn iter(&self) -> impl Iterator<Item = (SystemId, &BTreeSet<String>)> {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| (SystemId::from_mask(i as u64), set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use test_log::test;

    fn systems(f: u16, m: u16) -> Systems {
        let taxonomy = Taxonomy::build(f, Model::new(m).unwrap()).unwrap();
        Systems::enumerate(&taxonomy)
    }

    #[test]
    fn test_enumerates_all_systems() {
        let sys = systems(3, 19);
        assert_eq!(sys.len(), 8);
    }

    #[test]
    fn test_model8_scenario() {
        let sys = systems(2, 8);
        assert_eq!(sys.len(), 4);
        // System 1 (mask 0): nothing present.
        let s1: Vec<_> = sys.features(0).iter().cloned().collect();
        assert_eq!(s1, &["!f1", "!f2"]);
        // System 4 (mask 0b11): everything present.
        let s4: Vec<_> = sys.features(3).iter().cloned().collect();
        assert_eq!(s4, &["f1", "f1 * f2", "f1 + f2", "f2"]);
    }

    #[test]
    fn test_by_name() {
        let sys = systems(2, 8);
        assert_eq!(sys.by_name("S1").unwrap(), sys.features(0));
        assert_eq!(sys.by_name("S4").unwrap(), sys.features(3));
        assert_eq!(
            sys.by_name("S5").unwrap_err(),
            Error::UnknownSystem("S5".to_string())
        );
        assert_eq!(
            sys.by_name("S0").unwrap_err(),
            Error::UnknownSystem("S0".to_string())
        );
        assert_eq!(
            sys.by_name("x1").unwrap_err(),
            Error::UnknownSystem("x1".to_string())
        );
    }

    #[test]
    fn test_names_are_one_based() {
        let sys = systems(1, 5);
        assert_eq!(sys.name(0), "S1");
        assert_eq!(sys.name(1), "S2");
        let names: Vec<_> = sys.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(names, &["S1", "S2"]);
    }

    #[test]
    fn test_independent_membership_follows_mask() {
        let sys = systems(3, 1);
        for (id, set) in sys.iter() {
            for bit in 0..3 {
                let name = format!("f{}", bit + 1);
                assert_eq!(set.contains(&name), id.mask() & (1 << bit) != 0);
            }
        }
    }
}
