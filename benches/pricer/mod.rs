use criterion::Criterion;


pub fn register_benchmarks(c: &mut Criterion) {
    stream::register_benchmarks(c);
}
