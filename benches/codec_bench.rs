use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;
use tone_curve_editor::{decode_curve, encode_curve, CurveKind, CurveRecord};

fn build_spline(point_count: usize) -> CurveRecord {
    let points: Vec<DVec2> = (0..point_count)
        .map(|i| {
            let x = i as f64 / (point_count.max(2) - 1) as f64;
            DVec2::new(x, x * x * (3.0 - 2.0 * x))
        })
        .collect();
    CurveRecord::from_points(CurveKind::Spline, &points).expect("Spline-Punkte gültig")
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_encode");

    for &point_count in &[8usize, 256usize] {
        let record = build_spline(point_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            &record,
            |b, record| b.iter(|| black_box(encode_curve(black_box(record)))),
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_decode");

    for &point_count in &[8usize, 256usize] {
        let text = encode_curve(&build_spline(point_count));
        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            &text,
            |b, text| {
                b.iter(|| {
                    let record = decode_curve(black_box(text)).expect("Decode fehlgeschlagen");
                    black_box(record.point_count())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
