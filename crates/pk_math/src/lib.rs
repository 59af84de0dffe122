//! PK Math - vector and matrix algebra for the pktracer path tracer.
//!
//! All types are `Copy` value types over `f64`. Matrices are stored row-major
//! and multiply column vectors by row-dot products, matching the layout the
//! camera and renderer expect.

#[macro_use]
mod macros;

mod error;
mod matrix;
mod vector2;
mod vector3;
mod vector4;

pub use error::{MathError, MathResult};
pub use matrix::Matrix4x4;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_matrix_vector_pipeline() {
        // Translation lives in row 3, so a row-dot product with w=1 only moves w.
        let m = Matrix4x4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let v = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v, Vector4::new(1.0, 1.0, 1.0, 7.0));
    }
}
