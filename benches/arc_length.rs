//! Benchmarks for arc-length queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use arclen::curves::{ApproximatorOptions, CubicBezier2, CurveParameterApproximator};
use arclen::{Point2, Polyline};

fn zigzag(n: usize) -> Polyline<Point2<f64>> {
    (0..n)
        .map(|i| Point2::new(i as f64, if i % 2 == 0 { 0.0 } else { 1.0 }))
        .collect()
}

fn test_curve() -> CubicBezier2<f64> {
    CubicBezier2::new(
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 10.0),
        Point2::new(7.0, 10.0),
        Point2::new(10.0, 0.0),
    )
}

fn bench_polyline_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline_construction");

    for size in [100, 1000, 10000] {
        let points: Vec<Point2<f64>> = zigzag(size).vertices().to_vec();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("new", size), &points, |b, points| {
            b.iter(|| Polyline::new(black_box(points.iter().copied())))
        });
    }

    group.finish();
}

fn bench_point_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline_point_at");

    for size in [100, 1000, 10000] {
        let polyline = zigzag(size);
        let length = polyline.length();

        group.bench_with_input(BenchmarkId::new("single", size), &polyline, |b, p| {
            b.iter(|| p.point_at(black_box(length * 0.37)))
        });
    }

    group.finish();
}

fn bench_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline_divide");
    let polyline = zigzag(1000);

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("divide", count), &count, |b, &count| {
            b.iter(|| {
                polyline
                    .divide(black_box(count))
                    .map(|points| points.filter_map(Result::ok).count())
            })
        });
    }

    group.bench_function("divide_by_length_1.5", |b| {
        b.iter(|| {
            polyline
                .divide_by_length(black_box(1.5), true)
                .map(|points| points.count())
        })
    });

    group.finish();
}

fn bench_approximator(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_parameter_approximator");
    let curve = test_curve();

    for segments in [16, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("construct", segments),
            &segments,
            |b, &segments| {
                b.iter(|| {
                    CurveParameterApproximator::with_options(
                        &curve,
                        ApproximatorOptions::with_segments(black_box(segments)),
                    )
                })
            },
        );
    }

    let approx = CurveParameterApproximator::new(&curve).unwrap();
    let length = approx.length();

    group.bench_function("parameter_at", |b| {
        b.iter(|| approx.parameter_at(black_box(length * 0.61)))
    });

    group.bench_function("distance_at", |b| {
        b.iter(|| approx.distance_at(black_box(0.61)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_polyline_construction,
    bench_point_at,
    bench_divide,
    bench_approximator,
);
criterion_main!(benches);
