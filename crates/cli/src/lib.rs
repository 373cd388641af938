//! Seed loading and reporting for the `shelfpack` binary.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use shelfpack_core::ItemId;
use shelfpack_inventory::{AisleSection, Store, StoreConfig};

/// Environment variable naming the JSON seed file.
pub const SEED_ENV: &str = "SHELFPACK_SEED";

/// Read, validate and apply a JSON seed file.
pub fn load_store(path: impl AsRef<Path>) -> anyhow::Result<Store> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    store_from_json(&raw).with_context(|| format!("invalid seed file {}", path.display()))
}

pub fn store_from_json(raw: &str) -> anyhow::Result<Store> {
    let config = StoreConfig::from_json(raw)?;
    Ok(Store::from_config(&config)?)
}

/// Snapshot of store totals, logged after a refill pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub items_on_shelves: u32,
    pub items_in_stockroom: u64,
    pub fullest_section: AisleSection,
    pub fullest_section_items: u32,
}

impl StoreSummary {
    pub fn of(store: &Store) -> Self {
        let fullest_section = store.section_with_most_items();
        Self {
            items_on_shelves: ItemId::all().map(|id| store.items_on_shelves(id)).sum(),
            items_in_stockroom: ItemId::all().map(|id| u64::from(store.stockroom(id))).sum(),
            fullest_section,
            fullest_section_items: store
                .aisle(fullest_section.aisle)
                .num_items(fullest_section.section),
        }
    }
}
