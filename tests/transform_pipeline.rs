// tests/transform_pipeline.rs
//! Integration tests for the per-frame transform pipeline

use plinth::{Matrix4, Point3, Vector3};

#[test]
fn test_frame_transform_pipeline() {
    println!("=== Frame Transform Pipeline Test ===");

    // Projection and model-view are rebuilt from scratch each frame.
    let projection = Matrix4::from_perspective(45.0f32, 16.0 / 9.0, 0.1, 100.0)
        .expect("projection bounds are valid");

    let mut model_view = Matrix4::from_camera(
        Point3::new(0.0f32, 2.0, 8.0),
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    model_view.translate(Vector3::new(1.0, 0.0, 0.0));
    model_view.rotate(30.0, Vector3::new(0.0, 1.0, 0.0));

    // A rigid model-view carries normals with its own rotation part.
    let normal = model_view.normal_matrix().expect("model-view is invertible");
    for r in 0..3 {
        for c in 0..3 {
            let idx = r * 4 + c;
            assert!(
                (normal.data[idx] - model_view.data[idx]).abs() < 1e-4,
                "normal matrix drifted from the rotation part at ({}, {})",
                r,
                c
            );
        }
    }

    // Object-space origin lands inside the clip volume.
    let mvp = projection * model_view;
    let ndc = mvp.transform_point(Point3::new(0.0, 0.0, 0.0));
    assert!(ndc.x.abs() <= 1.0, "x escaped the clip volume: {}", ndc.x);
    assert!(ndc.y.abs() <= 1.0, "y escaped the clip volume: {}", ndc.y);
    assert!(ndc.z.abs() <= 1.0, "z escaped the clip volume: {}", ndc.z);

    // The upload form is the transpose.
    let uniform = mvp.to_column_major();
    assert_eq!(uniform[12], mvp.data[3]);
    assert_eq!(uniform[3], mvp.data[12]);

    println!("Frame transform pipeline: OK");
}

#[test]
fn test_hierarchical_transform_chain() {
    println!("=== Hierarchical Transform Chain Test ===");

    let orbit = 40.0f32;
    let spin = 25.0;
    let up = Vector3::new(0.0f32, 1.0, 0.0);

    let mut planet = Matrix4::identity();
    planet.rotate(orbit, up);
    planet.translate(Vector3::new(6.0, 0.0, 0.0));
    planet.rotate(spin, up);

    // The moon reuses the planet frame and extends the chain.
    let mut moon = planet;
    moon.rotate(orbit * 2.0, up);
    moon.translate(Vector3::new(1.5, 0.0, 0.0));

    let origin = Point3::new(0.0f32, 0.0, 0.0);
    let planet_center = planet.transform_point(origin);
    let moon_center = moon.transform_point(origin);

    // The planet sits on its orbit circle around the sun.
    assert!(
        (planet_center.length() - 6.0).abs() < 1e-4,
        "planet drifted off its orbit radius: {}",
        planet_center.length()
    );

    // The moon keeps its own radius from the planet.
    let separation = Vector3::from_points(planet_center, moon_center).length();
    assert!(
        (separation - 1.5).abs() < 1e-4,
        "moon drifted off its orbit radius: {}",
        separation
    );

    println!("Hierarchical transform chain: OK");
}

#[test]
fn test_rotation_angle_wraparound_is_seamless() {
    // Callers wrap their per-frame angle accumulators at 360 degrees;
    // the wrapped and unwrapped angles must produce the same rotation.
    let axis = Vector3::new(0.0f32, 1.0, 0.0);
    let unwrapped = Matrix4::from_rotation(370.0, axis);
    let wrapped = Matrix4::from_rotation(10.0, axis);

    for i in 0..16 {
        assert!(
            (unwrapped.data[i] - wrapped.data[i]).abs() < 1e-4,
            "wraparound mismatch at index {}",
            i
        );
    }
}

#[test]
fn test_off_axis_frustum_view() {
    println!("=== Off-Axis Frustum View Test ===");

    // An asymmetric viewing volume shifts the image without rotating the
    // camera; the symmetric volume keeps the center point centered.
    let symmetric = Matrix4::from_frustum(-0.5f32, 0.5, -0.5, 0.5, 1.0, 50.0)
        .expect("frustum bounds are valid");
    let shifted = Matrix4::from_frustum(0.0f32, 1.0, -0.5, 0.5, 1.0, 50.0)
        .expect("frustum bounds are valid");

    let ahead = Point3::new(0.0f32, 0.0, -10.0);
    let centered = symmetric.transform_point(ahead);
    let pushed = shifted.transform_point(ahead);

    assert!(centered.x.abs() < 1e-6);
    assert!(pushed.x < centered.x, "shifting the volume right must push the image left");

    println!("Off-axis frustum view: OK");
}

#[test]
fn test_invalid_bounds_reported_before_upload() {
    println!("=== Invalid Bounds Reporting Test ===");

    // Drawing code skips the frame on a reported error instead of
    // uploading a matrix poisoned by a division by zero.
    let result = Matrix4::<f32>::from_frustum(1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
    match result {
        Err(e) => println!("frame skipped: {}", e),
        Ok(_) => panic!("degenerate bounds must not produce a matrix"),
    }

    let result = Matrix4::<f32>::from_perspective(60.0, 1.0, -0.1, 10.0);
    match result {
        Err(e) => println!("frame skipped: {}", e),
        Ok(_) => panic!("negative near plane must not produce a matrix"),
    }
}

#[test]
fn test_matrix_snapshot_roundtrip() {
    // Frame state serializes as plain tuples and flat arrays.
    let snapshot = (
        Matrix4::from_perspective(45.0f32, 1.25, 0.1, 100.0).unwrap(),
        Matrix4::from_camera(
            Point3::new(0.0f32, 1.0, 4.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ),
        Vector3::new(1.0f32, 2.0, 3.0),
    );

    let bytes = bincode::serialize(&snapshot).expect("serialize failed");
    let restored: (Matrix4<f32>, Matrix4<f32>, Vector3<f32>) =
        bincode::deserialize(&bytes).expect("deserialize failed");

    assert_eq!(restored.0, snapshot.0);
    assert_eq!(restored.1, snapshot.1);
    assert_eq!(restored.2, snapshot.2);
}

#[test]
fn test_uniform_byte_stream_layout() {
    let projection = Matrix4::from_ortho(-1.0f32, 1.0, -1.0, 1.0, -1.0, 1.0)
        .expect("ortho bounds are valid");

    let upload = projection.to_column_major();
    let bytes: &[u8] = bytemuck::cast_slice(&upload);
    assert_eq!(bytes.len(), 64);

    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(floats[0], 1.0);
    assert_eq!(floats[15], 1.0);
}

#[test]
fn test_f64_pipeline() {
    let projection: Matrix4<f64> = Matrix4::from_perspective(90.0, 1.0, 1.0, 100.0)
        .expect("projection bounds are valid");
    assert!((projection.data[10] + 101.0 / 99.0).abs() < 1e-12);

    let inverse = projection.invert_fast().expect("projection is invertible");
    let product = inverse * projection;
    let identity = Matrix4::<f64>::identity();
    for i in 0..16 {
        assert!(
            (product.data[i] - identity.data[i]).abs() < 1e-12,
            "mismatch at index {}",
            i
        );
    }
}
