// src/types/mat4.rs
// Matrix4: the row-major 4x4 homogeneous transform type.

use core::ops::Mul;
use serde::{Deserialize, Serialize};

use super::mat3::Matrix3;
use super::point::Point3;
use super::traits::FloatingPoint;
use super::vec3::Vector3;
use super::vec4::Vector4;

/// Errors that can occur when validating projection volume bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    #[error("near plane must be positive")]
    NearNotPositive,

    #[error("far plane must lie beyond the near plane")]
    FarNotBeyondNear,

    #[error("left and right planes coincide")]
    DegenerateWidth,

    #[error("bottom and top planes coincide")]
    DegenerateHeight,

    #[error("near and far planes coincide")]
    DegenerateDepth,

    #[error("field of view must lie strictly between 0 and 180 degrees")]
    InvalidFieldOfView,

    #[error("aspect ratio must be positive")]
    InvalidAspect,
}

/// Matrix4 is a 4x4 homogeneous transform stored as sixteen contiguous
/// scalars, row-major: `data[r * 4 + c]` is the entry at row `r`, column `c`.
///
/// Values are built fresh each frame, composed through the frame's
/// transform pipeline and read out once with
/// [`to_column_major`](Self::to_column_major) for the uniform upload.
/// Every constructor returns an independently-owned value.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4<T: FloatingPoint = f32> {
    pub data: [T; 16],
}

// Serde passes matrices through as their flat arrays.
impl<T> Serialize for Matrix4<T>
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

impl<'de, T> Deserialize<'de> for Matrix4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[T; 16]>::deserialize(deserializer)?;
        Ok(Matrix4 { data })
    }
}

impl<T: FloatingPoint> Matrix4<T> {
    pub fn new(data: [T; 16]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 4 rows
    pub fn from_rows(r0: [T; 4], r1: [T; 4], r2: [T; 4], r3: [T; 4]) -> Self {
        Self {
            data: [
                r0[0], r0[1], r0[2], r0[3],
                r1[0], r1[1], r1[2], r1[3],
                r2[0], r2[1], r2[2], r2[3],
                r3[0], r3[1], r3[2], r3[3],
            ],
        }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut data = [T::zero(); 16];
        for i in 0..4 {
            data[i * 4 + i] = T::one();
        }
        Self { data }
    }

    /// Translation by `v`.
    pub fn from_translation(v: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.data[3] = v.x;
        m.data[7] = v.y;
        m.data[11] = v.z;
        m
    }

    /// Rotation about `axis` by `angle_degrees`, right-handed.
    ///
    /// Rodrigues' formula over the normalized axis; the angle is converted
    /// to radians internally. A zero-length axis has no rotation to offer
    /// and yields the identity.
    pub fn from_rotation(angle_degrees: T, axis: Vector3<T>) -> Self {
        let axis = axis.normalized();
        if axis.length_squared() == T::zero() {
            log::debug!("rotation axis has zero length, returning identity");
            return Self::identity();
        }

        let (s, c) = angle_degrees.to_radians().sin_cos();
        let t = T::one() - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        let mut data = [T::zero(); 16];
        data[0] = c + x * x * t;
        data[1] = x * y * t - z * s;
        data[2] = x * z * t + y * s;
        data[4] = y * x * t + z * s;
        data[5] = c + y * y * t;
        data[6] = y * z * t - x * s;
        data[8] = z * x * t - y * s;
        data[9] = z * y * t + x * s;
        data[10] = c + z * z * t;
        data[15] = T::one();
        Self { data }
    }

    /// Non-uniform scale along the axes.
    pub fn from_scale(s: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.data[0] = s.x;
        m.data[5] = s.y;
        m.data[10] = s.z;
        m
    }

    /// Off-axis perspective projection for the given frustum planes.
    ///
    /// The near plane must sit in front of the eye and the far plane beyond
    /// it; the side planes must not coincide. Violations are reported
    /// instead of letting a division by zero poison the matrix.
    pub fn from_frustum(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self, ProjectionError> {
        if left == right {
            return Err(ProjectionError::DegenerateWidth);
        }
        if bottom == top {
            return Err(ProjectionError::DegenerateHeight);
        }
        if near <= T::zero() {
            return Err(ProjectionError::NearNotPositive);
        }
        if far <= near {
            return Err(ProjectionError::FarNotBeyondNear);
        }

        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        let two_near = T::two() * near;

        let mut data = [T::zero(); 16];
        data[0] = two_near / width;
        data[2] = (right + left) / width;
        data[5] = two_near / height;
        data[6] = (top + bottom) / height;
        data[10] = -(far + near) / depth;
        data[11] = -(T::two() * far * near) / depth;
        data[14] = -T::one();
        Ok(Self { data })
    }

    /// Symmetric perspective projection from a vertical field of view in
    /// degrees and a width/height aspect ratio.
    pub fn from_perspective(
        fovy_degrees: T,
        aspect: T,
        near: T,
        far: T,
    ) -> Result<Self, ProjectionError> {
        let half_fovy = fovy_degrees.to_radians() / T::two();
        if half_fovy <= T::zero() || half_fovy >= T::pi() / T::two() {
            return Err(ProjectionError::InvalidFieldOfView);
        }
        if aspect <= T::zero() {
            return Err(ProjectionError::InvalidAspect);
        }
        if near <= T::zero() {
            return Err(ProjectionError::NearNotPositive);
        }
        if far <= near {
            return Err(ProjectionError::FarNotBeyondNear);
        }

        let focal = T::one() / half_fovy.tan();
        let depth = far - near;

        let mut data = [T::zero(); 16];
        data[0] = focal / aspect;
        data[5] = focal;
        data[10] = -(far + near) / depth;
        data[11] = -(T::two() * far * near) / depth;
        data[14] = -T::one();
        Ok(Self { data })
    }

    /// Orthographic projection over the given box.
    ///
    /// Only coinciding plane pairs are rejected; a non-positive near plane
    /// is legal here, matching `glOrtho`.
    pub fn from_ortho(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self, ProjectionError> {
        if left == right {
            return Err(ProjectionError::DegenerateWidth);
        }
        if bottom == top {
            return Err(ProjectionError::DegenerateHeight);
        }
        if near == far {
            return Err(ProjectionError::DegenerateDepth);
        }

        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut data = [T::zero(); 16];
        data[0] = T::two() / width;
        data[3] = -(right + left) / width;
        data[5] = T::two() / height;
        data[7] = -(top + bottom) / height;
        data[10] = -T::two() / depth;
        data[11] = -(far + near) / depth;
        data[15] = T::one();
        Ok(Self { data })
    }

    /// World-to-eye transform for a camera at `eye` looking at `target`.
    ///
    /// Builds the orthonormal basis `u, v, w` (`w` points backward along
    /// the view direction) as the rotation rows and composes it with the
    /// translation by `-eye`. When `up` is parallel to the view direction
    /// the basis degenerates; the finite result is still returned and the
    /// caller is expected to keep its inputs apart.
    pub fn from_camera(eye: Point3<T>, target: Point3<T>, up: Vector3<T>) -> Self {
        let w = -Vector3::from_points(eye, target).normalized();
        let u = up.cross(&w).normalized();
        if u.length_squared() == T::zero() {
            log::debug!("camera basis is degenerate, eye/target/up are collinear");
        }
        let v = w.cross(&u);

        let zero = T::zero();
        let rotation = Self::from_rows(
            [u.x, u.y, u.z, zero],
            [v.x, v.y, v.z, zero],
            [w.x, w.y, w.z, zero],
            [zero, zero, zero, T::one()],
        );
        rotation * Self::from_translation(-eye)
    }

    /// Post-multiply by a translation: `self = self * T(v)`.
    pub fn translate(&mut self, v: Vector3<T>) {
        *self = *self * Self::from_translation(v);
    }

    /// Post-multiply by a rotation: `self = self * R(angle, axis)`.
    pub fn rotate(&mut self, angle_degrees: T, axis: Vector3<T>) {
        *self = *self * Self::from_rotation(angle_degrees, axis);
    }

    /// Post-multiply by a scale: `self = self * S(s)`.
    pub fn scale(&mut self, s: Vector3<T>) {
        *self = *self * Self::from_scale(s);
    }

    /// Post-multiply by a camera transform.
    pub fn look_at(&mut self, eye: Point3<T>, target: Point3<T>, up: Vector3<T>) {
        *self = *self * Self::from_camera(eye, target, up);
    }

    /// Post-multiply by a perspective projection. On error `self` is left
    /// unchanged.
    pub fn perspective(
        &mut self,
        fovy_degrees: T,
        aspect: T,
        near: T,
        far: T,
    ) -> Result<(), ProjectionError> {
        *self = *self * Self::from_perspective(fovy_degrees, aspect, near, far)?;
        Ok(())
    }

    /// Post-multiply by a frustum projection. On error `self` is left
    /// unchanged.
    pub fn frustum(
        &mut self,
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<(), ProjectionError> {
        *self = *self * Self::from_frustum(left, right, bottom, top, near, far)?;
        Ok(())
    }

    /// Post-multiply by an orthographic projection. On error `self` is left
    /// unchanged.
    pub fn ortho(
        &mut self,
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<(), ProjectionError> {
        *self = *self * Self::from_ortho(left, right, bottom, top, near, far)?;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; 4] {
        [
            self.data[idx * 4],
            self.data[idx * 4 + 1],
            self.data[idx * 4 + 2],
            self.data[idx * 4 + 3],
        ]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; 4] {
        [
            self.data[idx],
            self.data[4 + idx],
            self.data[8 + idx],
            self.data[12 + idx],
        ]
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut data = [T::zero(); 16];
        for r in 0..4 {
            for c in 0..4 {
                data[c * 4 + r] = self.data[r * 4 + c];
            }
        }
        Self { data }
    }

    /// 3x3 minor with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3<T> {
        let mut data = [T::zero(); 9];
        let mut k = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            for c in 0..4 {
                if c == col {
                    continue;
                }
                data[k] = self.data[r * 4 + c];
                k += 1;
            }
        }
        Matrix3::new(data)
    }

    /// Signed cofactor at (`row`, `col`).
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor_det = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor_det
        } else {
            -minor_det
        }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let mut det = T::zero();
        for c in 0..4 {
            det = det + self.data[c] * self.cofactor(0, c);
        }
        det
    }

    /// Inverse by adjugate over determinant.
    ///
    /// `None` when the determinant is zero; near-singular input inverts to
    /// large-magnitude entries rather than erroring.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return None;
        }

        let mut data = [T::zero(); 16];
        for r in 0..4 {
            for c in 0..4 {
                // Adjugate: the transpose of the cofactor matrix.
                data[r * 4 + c] = self.cofactor(c, r) / det;
            }
        }
        Some(Self { data })
    }

    /// Closed-form inverse from twelve 2x2 sub-determinants.
    ///
    /// Algebraically the general inverse, valid for projective matrices as
    /// well as affine ones, and agrees with [`invert`](Self::invert) within
    /// float tolerance while skipping the full cofactor expansion. `None`
    /// when the determinant is zero.
    pub fn invert_fast(&self) -> Option<Self> {
        let m = &self.data;
        let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
        let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
        let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
        let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == T::zero() {
            return None;
        }
        let inv_det = T::one() / det;

        Some(Self {
            data: [
                (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
                (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
                (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
                (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
                (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
                (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
                (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
                (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
                (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
                (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
                (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
                (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
                (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
                (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
                (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
                (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
            ],
        })
    }

    /// Inverse-transpose, the matrix that carries surface normals under
    /// non-uniform scaling. `None` for singular input.
    pub fn normal_matrix(&self) -> Option<Self> {
        self.invert_fast().map(|inverse| inverse.transpose())
    }

    /// Apply the full homogeneous pipeline to a position: embed at `w = 1`,
    /// transform, standardize, truncate.
    pub fn transform_point(&self, p: Point3<T>) -> Point3<T> {
        (*self * Vector4::from_point(p)).standardized().truncate()
    }

    /// Column-major copy of the entries, the layout a GL-style uniform
    /// upload expects. This is the single transpose between the row-major
    /// representation and the graphics API.
    pub fn to_column_major(&self) -> [T; 16] {
        self.transpose().data
    }
}

// Row-major matrix product.
impl<T: FloatingPoint> Mul for Matrix4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let l = &self.data;
        let r = &rhs.data;
        let mut out = [T::zero(); 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = l[row * 4] * r[col]
                    + l[row * 4 + 1] * r[4 + col]
                    + l[row * 4 + 2] * r[8 + col]
                    + l[row * 4 + 3] * r[12 + col];
            }
        }
        Self { data: out }
    }
}

// Matrix times column vector.
impl<T: FloatingPoint> Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        let m = &self.data;
        Vector4 {
            x: m[0] * rhs.x + m[1] * rhs.y + m[2] * rhs.z + m[3] * rhs.w,
            y: m[4] * rhs.x + m[5] * rhs.y + m[6] * rhs.z + m[7] * rhs.w,
            z: m[8] * rhs.x + m[9] * rhs.y + m[10] * rhs.z + m[11] * rhs.w,
            w: m[12] * rhs.x + m[13] * rhs.y + m[14] * rhs.z + m[15] * rhs.w,
        }
    }
}

// Byte-level views for buffer uploads.
// Safety: repr(C) struct of a single float type, no padding.
unsafe impl bytemuck::Zeroable for Matrix4<f32> {}
unsafe impl bytemuck::Pod for Matrix4<f32> {}
unsafe impl bytemuck::Zeroable for Matrix4<f64> {}
unsafe impl bytemuck::Pod for Matrix4<f64> {}
