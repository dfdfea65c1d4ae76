// src/types/point.rs
// Point3 is a semantic alias for Vector3.

use super::vec3::Vector3;

/// Point3 is an alias to Vector3 to represent positions in space.
///
/// The alias keeps the generic scalar parameter and the f32 default.
pub type Point3<T = f32> = Vector3<T>;
