// src/types/mod.rs
// Numeric types namespace. The submodules live in src/types/*.rs.

pub mod mat3;
pub mod mat4;
pub mod point;
pub mod traits;
pub mod vec3;
pub mod vec4;
