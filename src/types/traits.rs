// src/types/traits.rs
// Scalar trait bound shared by every numeric type in the crate.

/// FloatingPoint is the scalar bound for the vector and matrix types.
///
/// Note: We require Copy, PartialOrd, the basic arithmetic ops on Self and
/// the few float intrinsics the transform operations lean on.
pub trait FloatingPoint:
Copy + PartialOrd
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;
    fn pi() -> Self;
    fn sqrt(self) -> Self;
    fn tan(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn to_radians(self) -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn tan(self) -> Self { f32::tan(self) }
    fn sin_cos(self) -> (Self, Self) { f32::sin_cos(self) }
    fn to_radians(self) -> Self { f32::to_radians(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn tan(self) -> Self { f64::tan(self) }
    fn sin_cos(self) -> (Self, Self) { f64::sin_cos(self) }
    fn to_radians(self) -> Self { f64::to_radians(self) }
}
