use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use field_mapper::app::{EditHistory, FieldStore, Snapshot};
use field_mapper::core::{adjust_line_length, compute_area, compute_perimeter};
use field_mapper::{Field, FieldId, GeoPoint, HaversineGeodesic};
use std::hint::black_box;

/// Kreisförmiges Polygon mit `count` Eckpunkten um einen festen Mittelpunkt.
fn build_ring(count: usize) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * std::f64::consts::TAU;
            GeoPoint::new(48.0 + 0.01 * angle.sin(), 11.0 + 0.01 * angle.cos())
        })
        .collect()
}

fn bench_measurements(c: &mut Criterion) {
    let geo = HaversineGeodesic::new();
    let mut group = c.benchmark_group("measurement");

    for count in [4usize, 64, 1024] {
        let points = build_ring(count);

        group.bench_with_input(BenchmarkId::new("area", count), &points, |b, points| {
            b.iter(|| black_box(compute_area(&geo, black_box(points))))
        });

        group.bench_with_input(
            BenchmarkId::new("perimeter", count),
            &points,
            |b, points| b.iter(|| black_box(compute_perimeter(&geo, black_box(points)))),
        );

        group.bench_with_input(
            BenchmarkId::new("adjust_line_length", count),
            &points,
            |b, points| {
                b.iter(|| black_box(adjust_line_length(&geo, black_box(points), 0, 25.0)))
            },
        );
    }

    group.finish();
}

fn bench_history_recording(c: &mut Criterion) {
    let geo = HaversineGeodesic::new();
    let mut group = c.benchmark_group("history");

    for field_count in [10usize, 100] {
        let fields: Vec<Field> = (0..field_count)
            .map(|i| Field::with_points(FieldId(i as u64 + 1), build_ring(32), &geo))
            .collect();
        let store = FieldStore::from_fields(fields);

        group.bench_with_input(
            BenchmarkId::new("record_snapshot", field_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let mut history = EditHistory::new_with_capacity(200);
                    history.reset(Snapshot::from_store(store));
                    for _ in 0..50 {
                        history.record_snapshot(Snapshot::from_store(black_box(store)));
                    }
                    black_box(history.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_measurements, bench_history_recording);
criterion_main!(benches);
