//! End-to-end allocator scenarios driven through a seeded store.

use shelfpack_core::{DomainError, ItemId};
use shelfpack_inventory::{AisleSection, NUM_SPACES, Store, StoreConfig};

fn id(value: u16) -> ItemId {
    ItemId::new(value).unwrap()
}

fn seeded(json: &str) -> Store {
    let config = StoreConfig::from_json(json).unwrap();
    Store::from_config(&config).unwrap()
}

#[test]
fn refill_tops_up_section_from_stockroom() {
    let mut store = seeded(
        r#"{
            "sections": [ { "aisle": 0, "section": 0, "id": 5, "spaces": 3 } ],
            "stockroom": [ { "id": 5, "count": 3 } ]
        }"#,
    );
    let before = store.aisle(0).num_items(0);
    assert_eq!(NUM_SPACES - before, 8);

    store.refill_from_stockroom();

    assert_eq!(store.aisle(0).num_items(0), before + 3);
    assert_eq!(store.stockroom(id(5)), 0);
}

#[test]
fn order_spans_two_sections_and_leaves_remainder() {
    let mut store = seeded(
        r#"{
            "sections": [
                { "aisle": 0, "section": 0, "id": 7, "spaces": 3 },
                { "aisle": 1, "section": 2, "id": 7, "spaces": 31 }
            ]
        }"#,
    );
    assert_eq!(store.stockroom(id(7)), 0);

    assert_eq!(store.fulfill_order(id(7), 6), 6);

    assert_eq!(store.aisle(0).num_items(0), 0);
    assert_eq!(store.aisle(1).num_items(2), 1);
    assert_eq!(store.items_on_shelves(id(7)), 1);
}

#[test]
fn refill_then_sell_through_then_locate_empty_section() {
    let mut store = seeded(
        r#"{
            "sections": [
                { "aisle": 2, "section": 1, "id": 12 },
                { "aisle": 2, "section": 3, "id": 12 },
                { "aisle": 8, "section": 0, "id": 40, "spaces": 1023 }
            ],
            "stockroom": [ { "id": 12, "count": 15 }, { "id": 40, "count": 2 } ]
        }"#,
    );

    store.refill_from_stockroom();
    assert!(store.aisle(2).section(1).is_full());
    assert_eq!(store.aisle(2).num_items(3), 5);
    assert_eq!(store.stockroom(id(40)), 2);
    assert_eq!(store.section_with_most_items(), AisleSection::new(2, 1));

    assert_eq!(store.fulfill_order(id(12), 10), 10);
    assert_eq!(store.empty_section_with_id(id(12)), Some(AisleSection::new(2, 1)));
    assert_eq!(store.section_with_most_items(), AisleSection::new(8, 0));

    // 5 on the shelf, nothing left in reserve
    assert_eq!(store.fulfill_order(id(12), 9), 5);
    assert_eq!(store.empty_section_with_id(id(12)), Some(AisleSection::new(2, 1)));
    assert!(store.aisle(2).section(3).is_empty());

    // shelf first, then the 2 in reserve
    assert_eq!(store.fulfill_order(id(40), 11), 11);
    assert_eq!(store.stockroom(id(40)), 1);
}

#[test]
fn invalid_seed_is_rejected_before_building() {
    let config = StoreConfig::from_json(
        r#"{ "sections": [ { "aisle": 0, "section": 0, "id": 1, "spaces": 2048 } ] }"#,
    )
    .unwrap();

    match Store::from_config(&config).unwrap_err() {
        DomainError::Validation(msg) => assert!(msg.contains("10 bits")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut a = Store::new();
    let b = Store::new();
    a.set_stockroom(id(0), 4);
    a.refill_from_stockroom();

    assert_eq!(a.aisle(0).num_items(0), 4);
    assert_eq!(b.aisle(0).num_items(0), 0);
    assert_ne!(a, b);
}
