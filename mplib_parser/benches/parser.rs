use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mplib_parser::parse_mplib;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");
    group.sample_size(50);

    for file in ["mp_small.dat"] {
        let contents = std::fs::read_to_string(format!("data/{file}")).unwrap();

        group.bench_with_input(
            BenchmarkId::new("parse_mplib", file),
            &contents,
            |b, contents| b.iter(|| parse_mplib(black_box(contents)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
