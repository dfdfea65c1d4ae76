// src/types/vec3.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;

/// Vector3 is a simple 3D vector type with a template-able scalar type.
///
/// The layout is three contiguous scalars, so the f32/f64 instantiations
/// cast directly to byte slices for buffer uploads.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Serde passes vectors through as bare tuples.
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Vector pointing from `a` to `b`.
    pub fn from_points(a: Self, b: Self) -> Self {
        b - a
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit-length copy of this vector.
    ///
    /// A vector that is already unit length comes back unchanged, and a
    /// zero vector stays zero; no division by zero occurs.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == T::zero() || len == T::one() {
            return *self;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

// Implement unary - for Vector3<T>
impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Implement scalar multiplication for Vector3<T>
impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Byte-level views for buffer uploads.
// Safety: repr(C) struct of a single float type, no padding.
unsafe impl bytemuck::Zeroable for Vector3<f32> {}
unsafe impl bytemuck::Pod for Vector3<f32> {}
unsafe impl bytemuck::Zeroable for Vector3<f64> {}
unsafe impl bytemuck::Pod for Vector3<f64> {}
