use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shelfpack_core::ItemId;
use shelfpack_inventory::{Aisle, SECTIONS_PER_AISLE, Store};

/// Aisle with a different id and occupancy pattern in every section.
fn sample_aisle() -> Aisle {
    Aisle::new(0x1234_651A_FC00_8001)
}

/// Every section of every aisle carries id `i % 64`, half full.
fn sample_store() -> Store {
    let mut store = Store::new();
    for a in 0..store.aisles().len() {
        let mut aisle = Aisle::EMPTY;
        for s in 0..SECTIONS_PER_AISLE {
            let id = ((a * SECTIONS_PER_AISLE + s) % 64) as u16;
            aisle = aisle.with_id(s, id).add_items(s, 5);
        }
        store.set_aisle(a, aisle);
    }
    for id in ItemId::all() {
        store.set_stockroom(id, 20);
    }
    store
}

fn bench_section_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_codec");
    group.throughput(Throughput::Elements(SECTIONS_PER_AISLE as u64));

    let aisle = sample_aisle();

    group.bench_function("num_items_all_sections", |b| {
        b.iter(|| {
            (0..SECTIONS_PER_AISLE)
                .map(|s| black_box(aisle).num_items(s))
                .sum::<u32>()
        });
    });

    group.bench_function("with_id_with_spaces", |b| {
        b.iter(|| {
            let mut a = black_box(aisle);
            for s in 0..SECTIONS_PER_AISLE {
                a = a.with_id(s, 42).with_spaces(s, 0b1010101010);
            }
            a
        });
    });

    for n in [1u32, 5, 10] {
        group.bench_with_input(BenchmarkId::new("add_then_remove", n), &n, |b, &n| {
            b.iter(|| {
                let mut a = black_box(aisle);
                for s in 0..SECTIONS_PER_AISLE {
                    a = a.add_items(s, n).remove_items(s, n);
                }
                a
            });
        });
    }

    for n in [3u32, 13, 1_000_003] {
        group.bench_with_input(BenchmarkId::new("rotate_left", n), &n, |b, &n| {
            b.iter(|| {
                let mut a = black_box(aisle);
                for s in 0..SECTIONS_PER_AISLE {
                    a = a.rotate_items_left(s, n);
                }
                a
            });
        });
    }

    group.finish();
}

fn bench_store_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_policies");

    group.bench_function("refill_from_stockroom", |b| {
        b.iter_batched(
            sample_store,
            |mut store| {
                store.refill_from_stockroom();
                store
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("fulfill_order_with_stockroom_fallback", |b| {
        let id = ItemId::from_bits(7);
        b.iter_batched(
            sample_store,
            |mut store| black_box(store.fulfill_order(id, 30)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("section_with_most_items", |b| {
        let store = sample_store();
        b.iter(|| black_box(&store).section_with_most_items());
    });

    group.finish();
}

criterion_group!(benches, bench_section_codec, bench_store_policies);
criterion_main!(benches);
