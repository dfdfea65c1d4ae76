//! Solar system example
//!
//! Builds a three-body transform hierarchy and steps it for a few frames,
//! with independently wrapping orbit and spin accumulators and an off-axis
//! frustum for the side viewport.

use plinth::{Matrix4, Point3, ProjectionError, Vector3};

const PLANET_ORBIT_RADIUS: f32 = 6.0;
const MOON_ORBIT_RADIUS: f32 = 1.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Plinth Solar System Example");
    println!("===========================");

    // Example 1: One projection per viewport
    let (center, side) = build_viewports()?;

    // Example 2: Shared camera above the orbital plane
    let view = Matrix4::from_camera(
        Point3::new(0.0f32, 12.0, 14.0),
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );

    // Example 3: Advance the hierarchy frame by frame
    let mut sun_spin = 0.0f32;
    let mut planet_orbit = 0.0f32;
    let mut moon_orbit = 0.0f32;

    for frame in 0..4 {
        // Each accumulator advances at its own rate and wraps on its own.
        advance(&mut sun_spin, 2.0);
        advance(&mut planet_orbit, 115.0);
        advance(&mut moon_orbit, 337.0);

        println!("\n--- Frame {} ---", frame);
        draw_frame(&center, &side, &view, sun_spin, planet_orbit, moon_orbit);
    }

    println!("\nAll frames completed successfully!");
    Ok(())
}

/// Advances an angle accumulator and wraps it into [0, 360).
fn advance(angle: &mut f32, step: f32) {
    *angle += step;
    if *angle >= 360.0 {
        *angle -= 360.0;
    }
}

/// Builds the symmetric center projection and the off-axis side projection.
fn build_viewports() -> Result<(Matrix4, Matrix4), ProjectionError> {
    let center = Matrix4::from_perspective(50.0f32, 4.0 / 3.0, 0.5, 200.0)?;

    // The side viewport looks through an asymmetric window, shifting the
    // scene toward the shared edge without rotating the camera.
    let side = Matrix4::from_frustum(0.0f32, 0.8, -0.3, 0.3, 0.5, 200.0)?;

    Ok((center, side))
}

/// Assembles the per-body model-view chain and reports every body once.
fn draw_frame(
    center: &Matrix4,
    side: &Matrix4,
    view: &Matrix4,
    sun_spin: f32,
    planet_orbit: f32,
    moon_orbit: f32,
) {
    let up = Vector3::new(0.0f32, 1.0, 0.0);

    let mut sun = *view;
    sun.rotate(sun_spin, up);

    let mut planet = *view;
    planet.rotate(planet_orbit, up);
    planet.translate(Vector3::new(PLANET_ORBIT_RADIUS, 0.0, 0.0));

    // The moon reuses the planet frame and extends the chain.
    let mut moon = planet;
    moon.rotate(moon_orbit, up);
    moon.translate(Vector3::new(MOON_ORBIT_RADIUS, 0.0, 0.0));

    report("sun", center, side, &sun);
    report("planet", center, side, &planet);
    report("moon", center, side, &moon);
}

/// Prints where a body lands in eye space and in each viewport's clip space.
fn report(name: &str, center: &Matrix4, side: &Matrix4, model_view: &Matrix4) {
    let origin = Point3::new(0.0f32, 0.0, 0.0);

    let eye = model_view.transform_point(origin);
    let centered = (*center * *model_view).transform_point(origin);
    let shifted = (*side * *model_view).transform_point(origin);

    println!(
        "  {:6} eye ({:+6.2}, {:+6.2}, {:+6.2})  center ({:+.3}, {:+.3})  side ({:+.3}, {:+.3})",
        name, eye.x, eye.y, eye.z, centered.x, centered.y, shifted.x, shifted.y
    );
}
