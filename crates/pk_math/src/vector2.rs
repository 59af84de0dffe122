use crate::{MathError, MathResult};
use std::ops::{Index, IndexMut, Sub};

/// A 2D vector, used for normalized device coordinates and mouse positions.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl_vector_ops!(Vector2 { x, y });

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get component `index` (0 = x, 1 = y).
    pub fn element(&self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::InvalidIndex { index, len: 2 }),
        }
    }

    /// Set component `index` (0 = x, 1 = y).
    pub fn set_element(&mut self, index: usize, value: f64) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(MathError::InvalidIndex { index, len: 2 }),
        }
        Ok(())
    }

    /// Z component of the 3D cross product of `self` and `rhs` lifted into the
    /// z = 0 plane. Equals the signed area of the parallelogram they span.
    #[inline]
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }
}

/// Subtract a scalar from both components.
impl Sub<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, t: f64) -> Self {
        Self::new(self.x - t, self.y - t)
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of bounds: {index}"),
        }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(values: [f64; 2]) -> Self {
        Self::new(values[0], values[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_scalar() {
        // NDC mapping: (x / w) * 2 - 1
        let coord = Vector2::new(0.5, 0.25) * 2.0 - 1.0;
        assert_eq!(coord, Vector2::new(0.0, -0.5));
    }

    #[test]
    fn test_cross() {
        let u = Vector2::new(1.0, 0.0);
        let v = Vector2::new(0.0, 1.0);
        assert_eq!(u.cross(v), 1.0);
        assert_eq!(v.cross(u), -1.0);
        // Parallel vectors span no area
        assert_eq!(u.cross(u * 3.0), 0.0);
    }

    #[test]
    fn test_element_access() {
        let mut v = Vector2::new(3.0, 4.0);
        assert_eq!(v.element(1), Ok(4.0));
        assert_eq!(
            v.element(2),
            Err(MathError::InvalidIndex { index: 2, len: 2 })
        );

        v.set_element(0, 7.0).unwrap();
        assert_eq!(v[0], 7.0);
        assert!(v.set_element(5, 1.0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let v = Vector2::ONE;
        let _ = v[2];
    }

    #[test]
    fn test_length() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-12);
    }
}
