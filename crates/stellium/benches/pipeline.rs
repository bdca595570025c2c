use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stellium::{Point, SpreadOptions, spread_points};

fn chart(name: &str, longitudes: &[f64]) -> Vec<Point> {
    longitudes
        .iter()
        .enumerate()
        .map(|(i, lon)| Point::new(format!("{name}_{i}"), *lon))
        .collect()
}

fn scattered(n: usize) -> Vec<f64> {
    // Golden-angle walk: spread out, with a few near misses.
    (0..n).map(|i| (i as f64 * 137.507_764) % 360.0).collect()
}

fn stellium(n: usize) -> Vec<f64> {
    (0..n).map(|i| 355.0 + i as f64 * 0.7).map(|d| d % 360.0).collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let options = SpreadOptions::default();
    let mut group = c.benchmark_group("spread_points");
    for (label, longitudes) in [
        ("scattered_13", scattered(13)),
        ("stellium_13", stellium(13)),
        ("scattered_40", scattered(40)),
        ("stellium_40", stellium(40)),
    ] {
        let points = chart(label, &longitudes);
        group.bench_with_input(BenchmarkId::from_parameter(label), &points, |b, points| {
            b.iter_batched(
                || points.clone(),
                |mut pts| {
                    let report = spread_points(&mut pts, black_box(&options)).unwrap();
                    black_box((pts, report))
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
