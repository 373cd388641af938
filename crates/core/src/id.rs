//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of an item type.
///
/// Item ids occupy the 6 most significant bits of a packed section, so the
/// valid range is `0..=63`. Deserialization goes through the same range check
/// as [`ItemId::new`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ItemId(u8);

impl ItemId {
    /// Largest representable item id.
    pub const MAX: u16 = 63;

    /// Number of distinct item ids (one stockroom slot each).
    pub const COUNT: usize = Self::MAX as usize + 1;

    /// Create an item id, rejecting values that do not fit in 6 bits.
    pub fn new(value: u16) -> DomainResult<Self> {
        if value > Self::MAX {
            return Err(DomainError::invalid_id(format!(
                "ItemId: {value} does not fit in 6 bits"
            )));
        }
        Ok(Self(value as u8))
    }

    /// Build an id from raw section bits, keeping only the low 6 bits.
    pub const fn from_bits(bits: u16) -> Self {
        Self((bits & Self::MAX) as u8)
    }

    pub const fn get(self) -> u16 {
        self.0 as u16
    }

    /// Index into a per-id table such as the stockroom.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All item ids in ascending order.
    pub fn all() -> impl Iterator<Item = ItemId> {
        (0..=Self::MAX).map(Self::from_bits)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u16> for ItemId {
    type Error = DomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for u16 {
    fn from(value: ItemId) -> Self {
        value.get()
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u16>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Self::new(value)
    }
}
