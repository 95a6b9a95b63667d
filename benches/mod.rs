use criterion::{criterion_group, criterion_main};

mod pricer;
mod side;

use pricer::register_benchmarks as register_pricer_benchmarks;
use side::register_benchmarks as register_side_benchmarks;

criterion_group!(
    benches,
    register_side_benchmarks,
    register_pricer_benchmarks,
);

criterion_main!(benches);
