// src/types/vec4.rs
// Vector4 homogeneous vector with default precision f32.

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vec3::Vector3;

/// Vector4 is a homogeneous 4-component vector.
///
/// `w` is the homogeneity weight: `1` marks a position, `0` a direction.
/// Construction stores the components verbatim; projective intermediates
/// coming out of a matrix product keep their raw `w` until
/// [`standardized`](Self::standardized) is called.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// Serde passes vectors through as bare tuples.
impl<T> Serialize for Vector4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

impl<T: FloatingPoint> Vector4<T> {
    /// Construct a new Vector4
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Embed a position with weight `w = 1`.
    pub fn from_point(p: Vector3<T>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            w: T::one(),
        }
    }

    /// Drop the weight and keep the spatial components.
    pub fn truncate(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Homogeneous standardization.
    ///
    /// A zero weight is coerced to `1` (the value is treated as a point),
    /// a unit weight passes through unchanged, and any other weight
    /// divides the spatial components and resets `w` to `1`.
    pub fn standardized(&self) -> Self {
        if self.w == T::zero() {
            return Self {
                x: self.x,
                y: self.y,
                z: self.z,
                w: T::one(),
            };
        }
        if self.w == T::one() {
            return *self;
        }
        Self {
            x: self.x / self.w,
            y: self.y / self.w,
            z: self.z / self.w,
            w: T::one(),
        }
    }
}

// Conversions between Vector4<T> and arrays [T; 4]

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
            w: array[3],
        }
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

// Byte-level views for buffer uploads.
// Safety: repr(C) struct of a single float type, no padding.
unsafe impl bytemuck::Zeroable for Vector4<f32> {}
unsafe impl bytemuck::Pod for Vector4<f32> {}
unsafe impl bytemuck::Zeroable for Vector4<f64> {}
unsafe impl bytemuck::Pod for Vector4<f64> {}
