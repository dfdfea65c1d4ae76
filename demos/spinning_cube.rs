//! Spinning cube example
//!
//! Rebuilds the projection and model-view matrices the way a render loop
//! does, advancing a caller-owned spin angle each frame and preparing the
//! column-major uniforms a GPU pipeline expects.

use plinth::{Matrix4, Point3, Vector3, Vector4};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Plinth Spinning Cube Example");
    println!("============================");

    // Example 1: One-time projection setup for the viewport shape
    let projection = Matrix4::from_perspective(45.0f32, 640.0 / 480.0, 0.1, 100.0)?;
    println!("\n--- Projection Setup ---");
    println!("  Field of view: 45 degrees, aspect {:.3}", 640.0 / 480.0);
    println!("  Depth range: 0.1 to 100.0");

    // Example 2: Per-frame model-view assembly
    run_render_loop(&projection)?;

    // Example 3: Degenerate input falls back to the identity
    // (run with RUST_LOG=debug to see the library report it)
    let fallback = Matrix4::from_rotation(45.0f32, Vector3::zero());
    println!("\n--- Degenerate Axis Fallback ---");
    println!("  Zero axis produced identity: {}", fallback == Matrix4::identity());

    // Example 4: Uniform upload preview
    show_uniform_upload(&projection);

    println!("\nAll frames completed successfully!");
    Ok(())
}

/// Drives a few frames of the render loop, rebuilding the model-view from
/// scratch each time the spin angle advances.
fn run_render_loop(projection: &Matrix4) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- Render Loop ---");

    let eye = Point3::new(0.0f32, 0.0, 5.0);
    let target = Point3::new(0.0f32, 0.0, 0.0);
    let up = Vector3::new(0.0f32, 1.0, 0.0);
    let corner = Point3::new(0.5f32, 0.5, 0.5);

    let mut spin = 0.0f32;
    for frame in 0..5 {
        // Advance and wrap the caller-owned angle accumulator.
        spin += 75.0;
        if spin >= 360.0 {
            spin -= 360.0;
        }

        let mut model_view = Matrix4::from_camera(eye, target, up);
        model_view.rotate(spin, Vector3::new(1.0, 1.0, 1.0));

        let normal = model_view
            .normal_matrix()
            .ok_or("model-view collapsed to a singular matrix")?;
        let lit = normal * Vector4::new(0.0, 0.0, 1.0, 0.0);

        let clip = (*projection * model_view).transform_point(corner);
        println!(
            "  Frame {}: spin {:5.1} deg  corner clip ({:+.3}, {:+.3}, {:+.3})  +z normal ({:+.3}, {:+.3}, {:+.3})",
            frame, spin, clip.x, clip.y, clip.z, lit.x, lit.y, lit.z
        );
    }

    Ok(())
}

/// Prints the column-major float and raw byte views a GPU upload would take.
fn show_uniform_upload(projection: &Matrix4) {
    println!("\n--- Uniform Upload Preview ---");

    let upload = projection.to_column_major();
    println!("  Column-major floats: {:?}", &upload[..4]);

    let bytes: &[u8] = bytemuck::cast_slice(&upload);
    println!("  Upload payload: {} bytes, first {:?}", bytes.len(), &bytes[..8]);
}
