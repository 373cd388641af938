//! Packed retail inventory.
//!
//! Aisles are 64-bit words of four 16-bit sections; each section packs a
//! 6-bit item id above a 10-bit occupancy bitmap. [`Aisle`] and [`Section`]
//! are the bit-level codec, [`Store`] sequences codec operations into refill
//! and order-fulfillment policies. Pure domain logic: no IO, no storage.

pub mod aisle;
pub mod config;
pub mod locator;
pub mod section;
pub mod store;

pub use aisle::{Aisle, SECTIONS_PER_AISLE};
pub use config::{SectionSeed, StockSeed, StoreConfig};
pub use locator::AisleSection;
pub use section::{NUM_SPACES, Section};
pub use store::{NUM_AISLES, NUM_ITEMS, Store};
