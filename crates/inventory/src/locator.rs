use serde::{Deserialize, Serialize};

use shelfpack_core::ValueObject;

/// Position of one section in a store: aisle index, then section index.
///
/// Searches that can miss return `Option<AisleSection>`; `None` stands for
/// the signed `(-1, -1)` sentinel, available through [`AisleSection::to_signed`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AisleSection {
    pub aisle: usize,
    pub section: usize,
}

impl ValueObject for AisleSection {}

impl AisleSection {
    pub const NOT_FOUND: (i32, i32) = (-1, -1);

    pub const fn new(aisle: usize, section: usize) -> Self {
        Self { aisle, section }
    }

    /// Flatten a search result into the signed pair form.
    pub fn to_signed(found: Option<Self>) -> (i32, i32) {
        match found {
            // Indices are bounded by the store dimensions.
            Some(loc) => (loc.aisle as i32, loc.section as i32),
            None => Self::NOT_FOUND,
        }
    }
}

impl core::fmt::Display for AisleSection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.aisle, self.section)
    }
}
