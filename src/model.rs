//! The model catalog.
//!
//! A *model* selects which derived feature categories exist in the product
//! line: or-features, and-features, not-features, or-not-features, and
//! and-not-features. The catalog enumerates 19 fixed combinations of these
//! five axes. The id-to-predicate mapping is a literal table; it follows no
//! arithmetic rule and must not be inferred from the id.

use std::fmt;

use crate::error::{Error, Result};

/// The five category predicates of one catalog row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct ModelFlags {
    or: bool,
    and: bool,
    not: bool,
    or_not: bool,
    and_not: bool,
}

/// One row per model id 1..=19, in order.
const MODELS: [ModelFlags; 19] = {
    const fn row(or: bool, and: bool, not: bool, or_not: bool, and_not: bool) -> ModelFlags {
        ModelFlags { or, and, not, or_not, and_not }
    }
    [
        row(false, false, false, false, false), // M1
        row(true, false, false, false, false),  // M2
        row(false, true, false, false, false),  // M3
        row(true, true, false, false, false),   // M4
        row(false, false, true, false, false),  // M5
        row(true, false, true, false, false),   // M6
        row(false, true, true, false, false),   // M7
        row(true, true, true, false, false),    // M8
        row(false, false, true, true, false),   // M9
        row(false, false, true, false, true),   // M10
        row(true, false, true, true, false),    // M11
        row(false, true, true, true, false),    // M12
        row(true, true, true, true, false),     // M13
        row(true, false, true, false, true),    // M14
        row(false, true, true, false, true),    // M15
        row(true, true, true, false, true),     // M16
        row(true, false, true, true, true),     // M17
        row(false, true, true, true, true),     // M18
        row(true, true, true, true, true),      // M19
    ]
};

/// A validated model id with its category predicates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Model {
    id: u16,
}

impl Model {
    /// Smallest valid model id.
    pub const MIN_ID: u16 = 1;
    /// Largest valid model id.
    pub const MAX_ID: u16 = 19;

    /// Looks up the model with the given id in the catalog.
    pub fn new(id: u16) -> Result<Self> {
        if !(Self::MIN_ID..=Self::MAX_ID).contains(&id) {
            return Err(Error::InvalidModel(id));
        }
        Ok(Model { id })
    }

    /// Returns the model id.
    pub fn id(self) -> u16 {
        self.id
    }

    fn flags(self) -> ModelFlags {
        MODELS[usize::from(self.id) - 1]
    }

    /// Whether this model has or-features.
    pub fn has_or(self) -> bool {
        self.flags().or
    }

    /// Whether this model has and-features.
    pub fn has_and(self) -> bool {
        self.flags().and
    }

    /// Whether this model has not-features.
    pub fn has_not(self) -> bool {
        self.flags().not
    }

    /// Whether this model has or-not-features.
    pub fn has_or_not(self) -> bool {
        self.flags().or_not
    }

    /// Whether this model has and-not-features.
    pub fn has_and_not(self) -> bool {
        self.flags().and_not
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.id)
    }
}
