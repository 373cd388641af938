//! Store seeding configuration.
//!
//! A seed assigns item ids (and optionally an initial occupancy bitmap) to
//! individual sections and sets per-id stockroom counts. Sections and
//! stockroom slots not mentioned in the seed start at zero.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use shelfpack_core::{DomainError, DomainResult, ItemId};

use crate::aisle::SECTIONS_PER_AISLE;
use crate::section::MAX_SPACES;
use crate::store::NUM_AISLES;

/// Initial contents of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSeed {
    pub aisle: usize,
    pub section: usize,
    pub id: ItemId,
    /// Occupancy bitmap (10 bits).
    #[serde(default)]
    pub spaces: u16,
}

/// Initial stockroom count for one item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSeed {
    pub id: ItemId,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub sections: Vec<SectionSeed>,
    #[serde(default)]
    pub stockroom: Vec<StockSeed>,
}

impl StoreConfig {
    /// Parse a JSON seed. The result is not yet validated.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DomainError::validation(format!("malformed store config: {e}")))
    }

    /// Check every seed against the fixed store dimensions.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for seed in &self.sections {
            if seed.aisle >= NUM_AISLES {
                return Err(DomainError::validation(format!(
                    "aisle {} out of range (store has {NUM_AISLES} aisles)",
                    seed.aisle
                )));
            }
            if seed.section >= SECTIONS_PER_AISLE {
                return Err(DomainError::validation(format!(
                    "section {} out of range (aisles have {SECTIONS_PER_AISLE} sections)",
                    seed.section
                )));
            }
            if seed.spaces > MAX_SPACES {
                return Err(DomainError::validation(format!(
                    "spaces {:#x} for section ({}, {}) do not fit in 10 bits",
                    seed.spaces, seed.aisle, seed.section
                )));
            }
            if !seen.insert((seed.aisle, seed.section)) {
                return Err(DomainError::validation(format!(
                    "section ({}, {}) seeded more than once",
                    seed.aisle, seed.section
                )));
            }
        }

        let mut ids = HashSet::new();
        for seed in &self.stockroom {
            if !ids.insert(seed.id) {
                return Err(DomainError::validation(format!(
                    "stockroom id {} seeded more than once",
                    seed.id
                )));
            }
        }
        Ok(())
    }
}
