use criterion::Criterion;

mod reduce_orders;

pub fn register_benchmarks(c: &mut Criterion) {
    add_orders::register_benchmarks(c);
    reduce_orders::register_benchmarks(c);
}
