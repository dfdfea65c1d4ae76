//! # Plinth - Row-Major Transform Math
//!
//! Plinth provides the 4x4/3x3 matrix and vector tool set for building
//! model-view and projection transforms on the CPU and handing them to a
//! column-major graphics API.
//!
//! ## Core Features
//!
//! - **Row-major storage**: `data[r * 4 + c]`, with a single transpose at
//!   the upload boundary via [`Matrix4::to_column_major`]
//! - **Transform constructors**: translation, Rodrigues rotation, scale,
//!   frustum/perspective/ortho projections and look-at cameras
//! - **General inversion**: cofactor-expansion [`Matrix4::invert`] and the
//!   sub-determinant [`Matrix4::invert_fast`], both projective-safe
//!
//! ## Quick Start
//!
//! ```rust
//! use plinth::{Matrix4, Point3, Vector3};
//!
//! # fn main() -> Result<(), plinth::ProjectionError> {
//! let projection = Matrix4::from_perspective(60.0, 16.0 / 9.0, 0.1, 100.0)?;
//! let mut model_view = Matrix4::from_camera(
//!     Point3::new(0.0, 1.5, 4.0),
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//! );
//! model_view.rotate(45.0, Vector3::new(0.0, 1.0, 0.0));
//!
//! // Column-major layout for the uniform upload.
//! let uniform: [f32; 16] = (projection * model_view).to_column_major();
//! # assert_eq!(uniform.len(), 16);
//! # Ok(())
//! # }
//! ```

pub mod types;

pub use types::mat3::Matrix3;
pub use types::mat4::{Matrix4, ProjectionError};
pub use types::point::Point3;
pub use types::traits::FloatingPoint;
pub use types::vec3::Vector3;
pub use types::vec4::Vector4;
