//! 64-bit packed aisle: four [`Section`]s, index 0 in the least significant bits.
//!
//! ```text
//!   MSB                                                       LSB
//!     +-------------+-------------+-------------+-------------+
//!     |  Section 3  |  Section 2  |  Section 1  |  Section 0  |
//!     +-------------+-------------+-------------+-------------+
//!     64            48            32            16            0
//! ```
//!
//! Section indices must be `0..4` and space indices `0..10`. Both are caller
//! preconditions, checked only in debug builds.

use serde::{Deserialize, Serialize};

use shelfpack_core::{ItemId, ValueObject};

use crate::section::Section;

/// Number of sections packed into one aisle.
pub const SECTIONS_PER_AISLE: usize = 4;

/// Width of one section in bits.
pub const SECTION_BITS: u32 = 16;

/// Preserves one section's worth of bits at the low end of an aisle.
pub const SECTION_MASK: u64 = 0xFFFF;

/// One packed aisle.
///
/// All mutators return the updated aisle; the receiver is never changed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct Aisle(u64);

impl ValueObject for Aisle {}

#[inline]
fn offset(index: usize) -> u32 {
    debug_assert!(
        index < SECTIONS_PER_AISLE,
        "section index {index} out of range"
    );
    SECTION_BITS * index as u32
}

impl Aisle {
    pub const EMPTY: Self = Self(0);

    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The 16 bits at offset `16 * index`.
    pub fn section(self, index: usize) -> Section {
        Section::new(((self.0 >> offset(index)) & SECTION_MASK) as u16)
    }

    /// Id of the section at `index`, in the low 6 bits.
    pub fn id(self, index: usize) -> u16 {
        self.section(index).id()
    }

    pub fn item_id(self, index: usize) -> ItemId {
        self.section(index).item_id()
    }

    /// Occupancy bitmap of the section at `index`, in the low 10 bits.
    pub fn spaces(self, index: usize) -> u16 {
        self.section(index).spaces()
    }

    /// Replace the whole section at `index`.
    pub fn with_section(self, index: usize, section: impl Into<Section>) -> Self {
        let shift = offset(index);
        let bits = u64::from(section.into().bits());
        Self((self.0 & !(SECTION_MASK << shift)) | (bits << shift))
    }

    /// Replace the id of the section at `index`. Ids above 63 are ignored.
    pub fn with_id(self, index: usize, new_id: u16) -> Self {
        self.map_section(index, |s| s.with_id(new_id))
    }

    /// Replace the spaces of the section at `index`. Bitmaps above 1023 are ignored.
    pub fn with_spaces(self, index: usize, new_spaces: u16) -> Self {
        self.map_section(index, |s| s.with_spaces(new_spaces))
    }

    pub fn num_items(self, index: usize) -> u32 {
        self.section(index).num_items()
    }

    pub fn toggle_space(self, index: usize, space_index: u32) -> Self {
        self.map_section(index, |s| s.toggle_space(space_index))
    }

    /// See [`Section::add_items`].
    pub fn add_items(self, index: usize, n: u32) -> Self {
        self.map_section(index, |s| s.add_items(n))
    }

    /// See [`Section::remove_items`].
    pub fn remove_items(self, index: usize, n: u32) -> Self {
        self.map_section(index, |s| s.remove_items(n))
    }

    pub fn rotate_items_left(self, index: usize, n: u32) -> Self {
        self.map_section(index, |s| s.rotate_left(n))
    }

    pub fn rotate_items_right(self, index: usize, n: u32) -> Self {
        self.map_section(index, |s| s.rotate_right(n))
    }

    /// Sections in index order.
    pub fn sections(self) -> impl Iterator<Item = Section> {
        (0..SECTIONS_PER_AISLE).map(move |index| self.section(index))
    }

    fn map_section(self, index: usize, f: impl FnOnce(Section) -> Section) -> Self {
        self.with_section(index, f(self.section(index)))
    }
}

impl From<u64> for Aisle {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Aisle> for u64 {
    fn from(aisle: Aisle) -> Self {
        aisle.0
    }
}

impl core::fmt::Display for Aisle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
