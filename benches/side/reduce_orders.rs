use criterion::{BatchSize, Criterion};
use std::hint::black_box;
use target_pricer::OrderBookSide;

fn populated_side(orders: u64) -> OrderBookSide {
    let mut side = OrderBookSide::bids(200);
    for i in 0..orders {
        let id = format!("o{i}");
        side.add(&id, 9_000 + (i * 17) % 300, 20);
    }
    side
}

/// Register benchmarks for reducing and removing resting orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBookSide - Reduce Orders");

    group.bench_function("partial_reduce", |b| {
        b.iter_batched(
            || populated_side(1_000),
            |mut side| {
                for i in 0..1_000u64 {
                    let id = format!("o{i}");
                    black_box(side.reduce(&id, 5));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("full_removal", |b| {
        b.iter_batched(
            || populated_side(1_000),
            |mut side| {
                for i in 0..1_000u64 {
                    let id = format!("o{i}");
                    black_box(side.reduce(&id, 20));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}
