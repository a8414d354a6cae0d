//! Type-safe wrappers for feature and system identifiers.
//!
//! This module provides newtype wrappers that enforce compile-time
//! distinction between independent-feature ids and system ids, preventing
//! index mixups in the combinatorial code.

use std::fmt;

/// An independent-feature identifier (1-indexed).
///
/// # Invariants
///
/// - Feature ids must be >= 1 (systems are identified by 0-based bitmasks,
///   where bit `i` corresponds to feature `i + 1`)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FeatureId(u16);

impl FeatureId {
    /// Creates a new feature id.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Feature ids must be 1-indexed.
    pub fn new(id: u16) -> Self {
        assert_ne!(id, 0, "Feature ids must be >= 1");
        FeatureId(id)
    }

    /// Returns the raw id as a `u16`.
    pub fn id(self) -> u16 {
        self.0
    }

    /// Returns the bit position of this feature in a system bitmask.
    pub fn bit(self) -> u32 {
        u32::from(self.0) - 1
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

impl From<FeatureId> for u16 {
    fn from(id: FeatureId) -> Self {
        id.0
    }
}

/// A system identifier (1-indexed display name over a 0-based bitmask).
///
/// System `S{k}` is the product-line member whose present independent
/// features are the set bits of the mask `k - 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SystemId(u64);

impl SystemId {
    /// Creates a system id from its 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index == 0`.
    pub fn new(index: u64) -> Self {
        assert_ne!(index, 0, "System ids must be >= 1");
        SystemId(index)
    }

    /// Creates a system id from its 0-based bitmask.
    pub fn from_mask(mask: u64) -> Self {
        SystemId(mask + 1)
    }

    /// Returns the 1-based index.
    pub fn index(self) -> u64 {
        self.0
    }

    /// Returns the bitmask of present independent features.
    pub fn mask(self) -> u64 {
        self.0 - 1
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A set-difference expression identifier (the exhaustive search key).
///
/// Bit `p` of the id assigns system `p + 1` to the intersection part (set)
/// or to the union part (clear).
pub type DifferenceId = u128;

/// Display name for a difference expression id (`E{id}`).
pub fn difference_name(id: DifferenceId) -> String {
    format!("E{}", id)
}
