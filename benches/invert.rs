//! Performance benchmarks comparing cofactor inversion vs the closed-form path.

use criterion::{criterion_group, criterion_main, Criterion, BenchmarkId, black_box};
use plinth::{Matrix4, Point3, Vector3};

fn model_view_projection() -> Matrix4 {
    let projection = Matrix4::from_perspective(45.0f32, 16.0 / 9.0, 0.1, 100.0)
        .expect("projection bounds are valid");
    let mut model_view = Matrix4::from_camera(
        Point3::new(3.0f32, 2.0, 8.0),
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    model_view.rotate(30.0, Vector3::new(0.0, 1.0, 0.0));
    model_view.scale(Vector3::new(1.5, 1.5, 1.5));
    projection * model_view
}

fn bench_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("inversion");

    // Test matrices of increasing density
    let matrices = [
        (
            "translation",
            Matrix4::from_translation(Vector3::new(1.0f32, 2.0, 3.0)),
        ),
        (
            "rotation",
            Matrix4::from_rotation(30.0, Vector3::new(1.0f32, 1.0, 0.0)),
        ),
        ("full_mvp", model_view_projection()),
    ];

    for (name, matrix) in &matrices {
        // Benchmark the general cofactor expansion
        group.bench_with_input(BenchmarkId::new("cofactor", name), matrix, |b, m| {
            b.iter(|| black_box(m.invert()))
        });

        // Benchmark the closed-form sub-determinant path
        group.bench_with_input(BenchmarkId::new("closed_form", name), matrix, |b, m| {
            b.iter(|| black_box(m.invert_fast()))
        });
    }

    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    group.bench_function("multiply", |b| {
        let left = model_view_projection();
        let right = Matrix4::from_rotation(12.0, Vector3::new(0.0f32, 1.0, 0.0));
        b.iter(|| black_box(black_box(left) * black_box(right)))
    });

    // One frame's worth of matrix work for a single object
    group.bench_function("frame_assembly", |b| {
        b.iter(|| {
            let projection = Matrix4::from_perspective(45.0f32, 16.0 / 9.0, 0.1, 100.0)
                .expect("projection bounds are valid");
            let mut model_view = Matrix4::from_camera(
                Point3::new(0.0f32, 2.0, 8.0),
                Point3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            );
            model_view.rotate(black_box(30.0), Vector3::new(0.0, 1.0, 0.0));
            let normal = model_view.normal_matrix();
            black_box((projection * model_view).to_column_major());
            black_box(normal);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_inversion, bench_composition);
criterion_main!(benches);
