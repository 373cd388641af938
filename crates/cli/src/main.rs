use shelfpack_cli::{SEED_ENV, StoreSummary, load_store};
use shelfpack_inventory::Store;

fn main() -> anyhow::Result<()> {
    shelfpack_observability::init();

    let mut store = match std::env::var(SEED_ENV) {
        Ok(path) => load_store(&path)?,
        Err(_) => {
            tracing::warn!("{SEED_ENV} not set; starting from an empty store");
            Store::new()
        }
    };

    store.refill_from_stockroom();

    let summary = StoreSummary::of(&store);
    tracing::info!(
        items_on_shelves = summary.items_on_shelves,
        items_in_stockroom = summary.items_in_stockroom,
        fullest_section = %summary.fullest_section,
        fullest_section_items = summary.fullest_section_items,
        "store refilled"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
