//! Store allocator: a fixed row of aisles plus a per-id stockroom.
//!
//! Every policy here scans aisle-major, section-minor, so lower indices are
//! always served (filled or drained) first.

use tracing::{debug, trace, warn};

use shelfpack_core::{DomainResult, ItemId};

use crate::aisle::{Aisle, SECTIONS_PER_AISLE};
use crate::config::StoreConfig;
use crate::locator::AisleSection;
use crate::section::{NUM_SPACES, Section};

/// Number of aisles in a store.
pub const NUM_AISLES: usize = 10;

/// Number of stockroom slots, one per item id.
pub const NUM_ITEMS: usize = ItemId::COUNT;

/// Aisle array and stockroom counts for one store.
///
/// A plain owned value; callers that share a store across threads provide
/// their own locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    aisles: [Aisle; NUM_AISLES],
    stockroom: [u32; NUM_ITEMS],
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Store with every section at id 0 and an empty stockroom.
    pub fn new() -> Self {
        Self {
            aisles: [Aisle::EMPTY; NUM_AISLES],
            stockroom: [0; NUM_ITEMS],
        }
    }

    /// Validate a seed and build the store it describes.
    pub fn from_config(config: &StoreConfig) -> DomainResult<Self> {
        config.validate()?;

        let mut store = Self::new();
        for seed in &config.sections {
            let section = Section::from_parts(seed.id, seed.spaces);
            store.aisles[seed.aisle] = store.aisles[seed.aisle].with_section(seed.section, section);
        }
        for seed in &config.stockroom {
            store.stockroom[seed.id.index()] = seed.count;
        }

        debug!(
            sections = config.sections.len(),
            stocked_ids = config.stockroom.len(),
            "seeded store"
        );
        Ok(store)
    }

    pub fn aisles(&self) -> &[Aisle; NUM_AISLES] {
        &self.aisles
    }

    pub fn aisle(&self, index: usize) -> Aisle {
        self.aisles[index]
    }

    pub fn set_aisle(&mut self, index: usize, aisle: Aisle) {
        self.aisles[index] = aisle;
    }

    pub fn stockroom(&self, id: ItemId) -> u32 {
        self.stockroom[id.index()]
    }

    pub fn set_stockroom(&mut self, id: ItemId, count: u32) {
        self.stockroom[id.index()] = count;
    }

    /// Items of type `id` currently on shelves, across all aisles.
    pub fn items_on_shelves(&self, id: ItemId) -> u32 {
        self.sections()
            .filter(|(_, section)| section.item_id() == id)
            .map(|(_, section)| section.num_items())
            .sum()
    }

    /// Every section with its position, in scan order.
    pub fn sections(&self) -> impl Iterator<Item = (AisleSection, Section)> + '_ {
        self.aisles.iter().enumerate().flat_map(|(a, aisle)| {
            aisle
                .sections()
                .enumerate()
                .map(move |(s, section)| (AisleSection::new(a, s), section))
        })
    }

    /// Move stockroom items onto the shelves.
    ///
    /// Each section takes items matching its id until it is full or the
    /// stockroom runs out of that id. A section is saturated before the next
    /// one is considered.
    pub fn refill_from_stockroom(&mut self) {
        let mut moved: u64 = 0;
        for (a, aisle) in self.aisles.iter_mut().enumerate() {
            for s in 0..SECTIONS_PER_AISLE {
                let section = aisle.section(s);
                let available = &mut self.stockroom[section.item_id().index()];
                let take = (*available).min(section.vacancies());
                if take == 0 {
                    continue;
                }
                *aisle = aisle.add_items(s, take);
                *available -= take;
                moved += u64::from(take);
                trace!(aisle = a, section = s, id = section.id(), take, "refilled section");
            }
        }
        debug!(moved, "refill from stockroom complete");
    }

    /// Take up to `quantity_requested` items of `product_id` out of the store.
    ///
    /// Shelves are drained first, in scan order; any shortfall comes from the
    /// stockroom. Returns how many items were taken, which is less than the
    /// request only when both tiers run dry. A non-positive request is a no-op
    /// returning 0.
    pub fn fulfill_order(&mut self, product_id: ItemId, quantity_requested: i64) -> i64 {
        if quantity_requested <= 0 {
            return 0;
        }

        let mut fulfilled: i64 = 0;
        for (a, aisle) in self.aisles.iter_mut().enumerate() {
            for s in 0..SECTIONS_PER_AISLE {
                if aisle.item_id(s) != product_id {
                    continue;
                }
                let take = i64::from(aisle.num_items(s)).min(quantity_requested - fulfilled);
                if take == 0 {
                    continue;
                }
                // take <= NUM_SPACES
                *aisle = aisle.remove_items(s, take as u32);
                fulfilled += take;
                trace!(aisle = a, section = s, id = %product_id, take, "picked from section");

                if fulfilled == quantity_requested {
                    debug!(id = %product_id, fulfilled, "order fulfilled from shelves");
                    return fulfilled;
                }
            }
        }

        let available = &mut self.stockroom[product_id.index()];
        let shortfall = quantity_requested - fulfilled;
        let from_stockroom = u32::try_from(shortfall).map_or(*available, |s| s.min(*available));
        *available -= from_stockroom;
        fulfilled += i64::from(from_stockroom);

        if fulfilled < quantity_requested {
            warn!(
                id = %product_id,
                requested = quantity_requested,
                fulfilled,
                "order only partially fulfilled"
            );
        } else {
            debug!(id = %product_id, fulfilled, from_stockroom, "order fulfilled");
        }
        fulfilled
    }

    /// First section holding `id` with no items in it.
    pub fn empty_section_with_id(&self, id: ItemId) -> Option<AisleSection> {
        self.sections()
            .find(|(_, section)| section.item_id() == id && section.is_empty())
            .map(|(loc, _)| loc)
    }

    /// Section with the most items; ties go to the earliest in scan order.
    ///
    /// An all-empty store yields `(0, 0)`.
    pub fn section_with_most_items(&self) -> AisleSection {
        let mut best = AisleSection::default();
        let mut best_items = 0;
        for (loc, section) in self.sections() {
            let items = section.num_items();
            if items > best_items {
                best = loc;
                best_items = items;
                if items == NUM_SPACES {
                    break;
                }
            }
        }
        best
    }
}
