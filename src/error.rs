//! Error type for taxonomy and strategy construction.

use thiserror::Error;

/// Errors reported by fallible constructors.
///
/// Invariant violations discovered *during* analysis (an evaluated set
/// difference isolating more than one feature) are not represented here:
/// they indicate a defect in the taxonomy/model consistency, not bad input,
/// and abort via panic instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Model ids are 1..=19; anything else has no row in the catalog.
    #[error("model id {0} is outside the catalog range 1..=19")]
    InvalidModel(u16),

    /// A product line needs at least one independent feature.
    #[error("a product line requires at least one independent feature")]
    NoFeatures,

    /// S = 2^F systems must stay enumerable; beyond
    /// [`MAX_FEATURES`][crate::taxonomy::MAX_FEATURES] the per-system index
    /// domain overflows.
    #[error("{0} independent features exceed the supported maximum")]
    TooManyFeatures(u16),

    /// k-combinations require 1 <= k <= n.
    #[error("combination of sample size {k} from {n} symbols violates n >= k >= 1")]
    CombinationSize { n: usize, k: usize },

    /// The exhaustive strategy keys its search on a 128-bit difference id;
    /// once S >= 128 the id space no longer fits.
    #[error("2^{s} difference ids exceed the 128-bit search key space")]
    SearchSpaceTooLarge { s: u64 },

    /// A system name did not parse as `S<k>` with k in 1..=S.
    #[error("{0:?} is not a known system name")]
    UnknownSystem(String),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
