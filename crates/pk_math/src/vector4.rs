use crate::{MathError, MathResult, Vector3};
use std::ops::{Index, IndexMut};

/// A 4D vector, used for homogeneous coordinates and RGBA colors.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_vector_ops!(Vector4 { x, y, z, w });

impl Vector4 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Build from a 3D vector and a `w` component.
    #[inline]
    pub const fn from_vector3(v: Vector3, w: f64) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// The `(x, y, z)` part.
    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Get component `index` (0 = x, 1 = y, 2 = z, 3 = w).
    pub fn element(&self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::InvalidIndex { index, len: 4 }),
        }
    }

    /// Set component `index` (0 = x, 1 = y, 2 = z, 3 = w).
    pub fn set_element(&mut self, index: usize, value: f64) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(MathError::InvalidIndex { index, len: 4 }),
        }
        Ok(())
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Index<usize> for Vector4 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of bounds: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of bounds: {index}"),
        }
    }
}

impl From<[f64; 4]> for Vector4 {
    fn from(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}
