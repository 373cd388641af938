//! 16-bit packed section: a 6-bit item id above a 10-bit occupancy bitmap.
//!
//! ```text
//!   MSB                               LSB
//!     +-----------+-------------------+
//!     |  item id  |   section spaces  |
//!     +-----------+-------------------+
//!     16          10                  0
//! ```
//!
//! Bit `k` of the spaces field is 1 when space `k` holds an item of the
//! section's type. Every "which spaces" policy in this module walks from the
//! least significant space upward.

use serde::{Deserialize, Serialize};

use shelfpack_core::{ItemId, ValueObject};

/// Number of item spaces in one section.
pub const NUM_SPACES: u32 = 10;

/// Preserves the spaces bits of a section.
pub const SPACES_MASK: u16 = 0x03FF;

/// Preserves the id bits of a section.
pub const ID_MASK: u16 = 0xFC00;

/// Largest id that fits in the id field.
pub const MAX_ID: u16 = ItemId::MAX;

/// Largest bitmap that fits in the spaces field.
pub const MAX_SPACES: u16 = SPACES_MASK;

/// One packed section.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct Section(u16);

impl ValueObject for Section {}

impl Section {
    /// Id 0, no items.
    pub const EMPTY: Self = Self(0);

    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Pack an id and a spaces bitmap. Bits of `spaces` above the field are dropped.
    pub const fn from_parts(id: ItemId, spaces: u16) -> Self {
        Self((id.get() << NUM_SPACES) | (spaces & SPACES_MASK))
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Item id in the low 6 bits.
    pub const fn id(self) -> u16 {
        (self.0 & ID_MASK) >> NUM_SPACES
    }

    pub const fn item_id(self) -> ItemId {
        ItemId::from_bits(self.id())
    }

    /// Occupancy bitmap in the low 10 bits.
    pub const fn spaces(self) -> u16 {
        self.0 & SPACES_MASK
    }

    pub const fn num_items(self) -> u32 {
        self.spaces().count_ones()
    }

    pub const fn vacancies(self) -> u32 {
        NUM_SPACES - self.num_items()
    }

    pub const fn is_full(self) -> bool {
        self.spaces() == SPACES_MASK
    }

    pub const fn is_empty(self) -> bool {
        self.spaces() == 0
    }

    /// Replace the id, keeping the spaces.
    ///
    /// An id wider than 6 bits leaves the section unchanged. Callers rely on
    /// this being a silent no-op rather than an error.
    pub const fn with_id(self, new_id: u16) -> Self {
        if new_id > MAX_ID {
            return self;
        }
        Self((self.0 & !ID_MASK) | (new_id << NUM_SPACES))
    }

    /// Replace the spaces bitmap, keeping the id.
    ///
    /// A bitmap wider than 10 bits leaves the section unchanged.
    pub const fn with_spaces(self, new_spaces: u16) -> Self {
        if new_spaces > MAX_SPACES {
            return self;
        }
        Self((self.0 & !SPACES_MASK) | new_spaces)
    }

    /// Flip the occupancy of one space (0 = least significant).
    pub fn toggle_space(self, space_index: u32) -> Self {
        debug_assert!(
            space_index < NUM_SPACES,
            "space index {space_index} out of range"
        );
        Self(self.0 ^ (1 << space_index))
    }

    /// Fill up to `n` vacant spaces, lowest vacant space first.
    pub fn add_items(self, n: u32) -> Self {
        let mut spaces = self.spaces();
        for _ in 0..n.min(self.vacancies()) {
            let vacant = !spaces & SPACES_MASK;
            // lowest zero bit
            spaces |= vacant & vacant.wrapping_neg();
        }
        self.with_spaces(spaces)
    }

    /// Empty up to `n` occupied spaces, lowest occupied space first.
    pub fn remove_items(self, n: u32) -> Self {
        let mut spaces = self.spaces();
        for _ in 0..n.min(self.num_items()) {
            // clear lowest one bit
            spaces &= spaces - 1;
        }
        self.with_spaces(spaces)
    }

    /// Rotate the spaces bitmap towards the id field: space `p` moves to
    /// `(p + n) % 10`. Any `n` is valid.
    pub const fn rotate_left(self, n: u32) -> Self {
        let n = n % NUM_SPACES;
        let spaces = self.spaces();
        let rotated = ((spaces << n) | (spaces >> (NUM_SPACES - n))) & SPACES_MASK;
        self.with_spaces(rotated)
    }

    /// Inverse of [`Section::rotate_left`].
    pub const fn rotate_right(self, n: u32) -> Self {
        let n = n % NUM_SPACES;
        let spaces = self.spaces();
        let rotated = ((spaces >> n) | (spaces << (NUM_SPACES - n))) & SPACES_MASK;
        self.with_spaces(rotated)
    }
}

impl From<u16> for Section {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<Section> for u16 {
    fn from(section: Section) -> Self {
        section.0
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "id={} spaces={:#012b}", self.id(), self.spaces())
    }
}
