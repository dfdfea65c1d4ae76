// src/types/mat3.rs
// Matrix3: flat row-major 3x3 block, the cofactor building block for Matrix4.

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;

/// Matrix3 is a 3x3 matrix stored as nine contiguous scalars, row-major:
/// `data[r * 3 + c]` is the entry at row `r`, column `c`.
///
/// It exists as the scalar-determinant building block for the 4x4 cofactor
/// expansion and is never used as a transform on its own.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3<T: FloatingPoint = f32> {
    pub data: [T; 9],
}

// Serde passes matrices through as their flat arrays.
impl<T> Serialize for Matrix3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[T; 9]>::deserialize(deserializer)?;
        Ok(Matrix3 { data })
    }
}

impl<T: FloatingPoint> Matrix3<T> {
    pub fn new(data: [T; 9]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Self {
        Self {
            data: [
                r0[0], r0[1], r0[2],
                r1[0], r1[1], r1[2],
                r2[0], r2[1], r2[2],
            ],
        }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut data = [T::zero(); 9];
        for i in 0..3 {
            data[i * 3 + i] = T::one();
        }
        Self { data }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; 3] {
        [
            self.data[idx * 3],
            self.data[idx * 3 + 1],
            self.data[idx * 3 + 2],
        ]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; 3] {
        [self.data[idx], self.data[3 + idx], self.data[6 + idx]]
    }

    /// Determinant by the rule of Sarrus.
    pub fn determinant(&self) -> T {
        let m = &self.data;
        m[0] * (m[4] * m[8] - m[5] * m[7])
            - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }
}

// Byte-level views for buffer uploads.
// Safety: repr(C) struct of a single float type, no padding.
unsafe impl bytemuck::Zeroable for Matrix3<f32> {}
unsafe impl bytemuck::Pod for Matrix3<f32> {}
unsafe impl bytemuck::Zeroable for Matrix3<f64> {}
unsafe impl bytemuck::Pod for Matrix3<f64> {}
