// 4x4 matrix, row-major.
//
// Element (row, col) lives at elements[row * 4 + col]. A matrix-vector product
// takes the dot product of every row with the vector, while view matrices
// keep their translation in row 3 (see `look_at`).

use crate::{MathError, MathResult, Vector3, Vector4};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

const DIMENSION: usize = 4;
const DIMENSION_SQUARED: usize = DIMENSION * DIMENSION;

/// A 4x4 matrix of `f64` elements in row-major order.
///
/// `Default` is the zero matrix.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
    elements: [f64; DIMENSION_SQUARED],
}

impl Matrix4x4 {
    pub const ZERO: Self = Self {
        elements: [0.0; DIMENSION_SQUARED],
    };

    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Create a zero matrix.
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Create a matrix from 16 row-major elements (m00, m01, ..., m33).
    pub const fn from_elements(elements: [f64; DIMENSION_SQUARED]) -> Self {
        Self { elements }
    }

    /// Row-major elements.
    pub fn elements(&self) -> &[f64; DIMENSION_SQUARED] {
        &self.elements
    }

    /// Make this matrix the identity.
    pub fn set_identity(&mut self) {
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                self.elements[row * DIMENSION + col] = if row == col { 1.0 } else { 0.0 };
            }
        }
    }

    /// Get element (row, col).
    pub fn element(&self, row: usize, col: usize) -> MathResult<f64> {
        Self::offset(row, col).map(|i| self.elements[i])
    }

    /// Set element (row, col).
    pub fn set_element(&mut self, row: usize, col: usize, value: f64) -> MathResult<()> {
        let i = Self::offset(row, col)?;
        self.elements[i] = value;
        Ok(())
    }

    fn offset(row: usize, col: usize) -> MathResult<usize> {
        if row >= DIMENSION {
            return Err(MathError::InvalidIndex {
                index: row,
                len: DIMENSION,
            });
        }
        if col >= DIMENSION {
            return Err(MathError::InvalidIndex {
                index: col,
                len: DIMENSION,
            });
        }
        Ok(row * DIMENSION + col)
    }

    /// Get row `row` as a vector.
    pub fn row(&self, row: usize) -> MathResult<Vector4> {
        let start = Self::offset(row, 0)?;
        let r = &self.elements[start..start + DIMENSION];
        Ok(Vector4::new(r[0], r[1], r[2], r[3]))
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                result.elements[col * DIMENSION + row] = self.elements[row * DIMENSION + col];
            }
        }
        result
    }

    /// Multiply by the column vector `(x, y, z, w)`.
    #[inline]
    pub fn mul_xyzw(&self, x: f64, y: f64, z: f64, w: f64) -> Vector4 {
        *self * Vector4::new(x, y, z, w)
    }

    /// Cofactor expansion shared by `invert` and `determinant`.
    ///
    /// Returns the transposed source and its cofactor matrix; the determinant
    /// is the dot product of their first rows.
    fn cofactors(&self) -> ([f64; 16], [f64; 16]) {
        let e = &self.elements;
        let mut src = [0.0; 16];
        let mut dst = [0.0; 16];
        let mut tmp = [0.0; 12];

        // Transpose
        for i in 0..DIMENSION {
            src[i] = e[i * 4];
            src[i + 4] = e[i * 4 + 1];
            src[i + 8] = e[i * 4 + 2];
            src[i + 12] = e[i * 4 + 3];
        }

        // Pairs for the first 8 cofactors
        tmp[0] = src[10] * src[15];
        tmp[1] = src[11] * src[14];
        tmp[2] = src[9] * src[15];
        tmp[3] = src[11] * src[13];
        tmp[4] = src[9] * src[14];
        tmp[5] = src[10] * src[13];
        tmp[6] = src[8] * src[15];
        tmp[7] = src[11] * src[12];
        tmp[8] = src[8] * src[14];
        tmp[9] = src[10] * src[12];
        tmp[10] = src[8] * src[13];
        tmp[11] = src[9] * src[12];

        dst[0] = tmp[0] * src[5] + tmp[3] * src[6] + tmp[4] * src[7];
        dst[0] -= tmp[1] * src[5] + tmp[2] * src[6] + tmp[5] * src[7];
        dst[1] = tmp[1] * src[4] + tmp[6] * src[6] + tmp[9] * src[7];
        dst[1] -= tmp[0] * src[4] + tmp[7] * src[6] + tmp[8] * src[7];
        dst[2] = tmp[2] * src[4] + tmp[7] * src[5] + tmp[10] * src[7];
        dst[2] -= tmp[3] * src[4] + tmp[6] * src[5] + tmp[11] * src[7];
        dst[3] = tmp[5] * src[4] + tmp[8] * src[5] + tmp[11] * src[6];
        dst[3] -= tmp[4] * src[4] + tmp[9] * src[5] + tmp[10] * src[6];
        dst[4] = tmp[1] * src[1] + tmp[2] * src[2] + tmp[5] * src[3];
        dst[4] -= tmp[0] * src[1] + tmp[3] * src[2] + tmp[4] * src[3];
        dst[5] = tmp[0] * src[0] + tmp[7] * src[2] + tmp[8] * src[3];
        dst[5] -= tmp[1] * src[0] + tmp[6] * src[2] + tmp[9] * src[3];
        dst[6] = tmp[3] * src[0] + tmp[6] * src[1] + tmp[11] * src[3];
        dst[6] -= tmp[2] * src[0] + tmp[7] * src[1] + tmp[10] * src[3];
        dst[7] = tmp[4] * src[0] + tmp[9] * src[1] + tmp[10] * src[2];
        dst[7] -= tmp[5] * src[0] + tmp[8] * src[1] + tmp[11] * src[2];

        // Pairs for the second 8 cofactors
        tmp[0] = src[2] * src[7];
        tmp[1] = src[3] * src[6];
        tmp[2] = src[1] * src[7];
        tmp[3] = src[3] * src[5];
        tmp[4] = src[1] * src[6];
        tmp[5] = src[2] * src[5];
        tmp[6] = src[0] * src[7];
        tmp[7] = src[3] * src[4];
        tmp[8] = src[0] * src[6];
        tmp[9] = src[2] * src[4];
        tmp[10] = src[0] * src[5];
        tmp[11] = src[1] * src[4];

        dst[8] = tmp[0] * src[13] + tmp[3] * src[14] + tmp[4] * src[15];
        dst[8] -= tmp[1] * src[13] + tmp[2] * src[14] + tmp[5] * src[15];
        dst[9] = tmp[1] * src[12] + tmp[6] * src[14] + tmp[9] * src[15];
        dst[9] -= tmp[0] * src[12] + tmp[7] * src[14] + tmp[8] * src[15];
        dst[10] = tmp[2] * src[12] + tmp[7] * src[13] + tmp[10] * src[15];
        dst[10] -= tmp[3] * src[12] + tmp[6] * src[13] + tmp[11] * src[15];
        dst[11] = tmp[5] * src[12] + tmp[8] * src[13] + tmp[11] * src[14];
        dst[11] -= tmp[4] * src[12] + tmp[9] * src[13] + tmp[10] * src[14];
        dst[12] = tmp[2] * src[10] + tmp[5] * src[11] + tmp[1] * src[9];
        dst[12] -= tmp[4] * src[11] + tmp[0] * src[9] + tmp[3] * src[10];
        dst[13] = tmp[8] * src[11] + tmp[0] * src[8] + tmp[7] * src[10];
        dst[13] -= tmp[6] * src[10] + tmp[9] * src[11] + tmp[1] * src[8];
        dst[14] = tmp[6] * src[9] + tmp[11] * src[11] + tmp[3] * src[8];
        dst[14] -= tmp[10] * src[11] + tmp[2] * src[8] + tmp[7] * src[9];
        dst[15] = tmp[10] * src[10] + tmp[4] * src[8] + tmp[9] * src[9];
        dst[15] -= tmp[8] * src[9] + tmp[11] * src[10] + tmp[5] * src[8];

        (src, dst)
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let (src, dst) = self.cofactors();
        src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3]
    }

    /// Invert in place using the adjugate divided by the determinant.
    ///
    /// A singular matrix divides by zero and leaves non-finite elements.
    pub fn invert(&mut self) {
        let (src, dst) = self.cofactors();
        let det = src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3];
        let inv_det = 1.0 / det;

        for (element, cofactor) in self.elements.iter_mut().zip(dst) {
            *element = cofactor * inv_det;
        }
    }

    /// Inverted copy. See [`Matrix4x4::invert`].
    pub fn inverse(&self) -> Self {
        let mut result = *self;
        result.invert();
        result
    }

    /// Identity with `(dx, dy, dz)` in row 3.
    pub fn from_translation(offset: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.elements[12] = offset.x;
        result.elements[13] = offset.y;
        result.elements[14] = offset.z;
        result
    }

    /// Append a translation to this matrix.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        *self = *self * Self::from_translation(Vector3::new(dx, dy, dz));
    }

    /// Right-handed view matrix looking from `eye` towards `center`.
    ///
    /// ```text
    /// right.x          up.x          -forward.x         0
    /// right.y          up.y          -forward.y         0
    /// right.z          up.z          -forward.z         0
    /// -dot(right, eye) -dot(up, eye)  dot(forward, eye) 1
    /// ```
    pub fn look_at(eye: Vector3, center: Vector3, up: Vector3) -> Self {
        let forward = (center - eye).normalize();
        let up = up.normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        Self::from_elements([
            right.x, up.x, -forward.x, 0.0, //
            right.y, up.y, -forward.y, 0.0, //
            right.z, up.z, -forward.z, 0.0, //
            -right.dot(eye), -up.dot(eye), forward.dot(eye), 1.0,
        ])
    }

    /// Right-handed perspective projection.
    ///
    /// `fov` is the vertical field of view in radians and `aspect` is
    /// width / height.
    pub fn perspective_fov(fov: f64, aspect: f64, near: f64, far: f64) -> MathResult<Self> {
        if aspect == 0.0 {
            return Err(MathError::DegenerateAspect);
        }
        if far == near {
            return Err(MathError::DegenerateClipPlanes { near, far });
        }

        let tan_half_fov = (fov / 2.0).tan();

        let mut result = Self::ZERO;
        result.elements[0] = 1.0 / (aspect * tan_half_fov);
        result.elements[5] = 1.0 / tan_half_fov;
        result.elements[10] = -(far + near) / (far - near);
        result.elements[11] = -1.0;
        result.elements[14] = (-2.0 * far * near) / (far - near);
        Ok(result)
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        for (a, b) in result.elements.iter_mut().zip(rhs.elements) {
            *a += b;
        }
        result
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        for (a, b) in result.elements.iter_mut().zip(rhs.elements) {
            *a -= b;
        }
        result
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                let mut sum = 0.0;
                for k in 0..DIMENSION {
                    sum += self.elements[row * DIMENSION + k] * rhs.elements[k * DIMENSION + col];
                }
                result.elements[row * DIMENSION + col] = sum;
            }
        }
        result
    }
}

impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let v = v.to_array();
        let mut result = [0.0; DIMENSION];
        for (row, value) in result.iter_mut().enumerate() {
            for (col, component) in v.iter().enumerate() {
                *value += self.elements[row * DIMENSION + col] * component;
            }
        }
        Vector4::from(result)
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match Self::offset(row, col) {
            Ok(i) => &self.elements[i],
            Err(e) => panic!("Matrix4x4 {e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match Self::offset(row, col) {
            Ok(i) => &mut self.elements[i],
            Err(e) => panic!("Matrix4x4 {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 0.000001;

    fn reference_projection() -> Matrix4x4 {
        let vertical_fov: f64 = 45.0;
        let (width, height) = (1920.0, 1080.0);
        Matrix4x4::perspective_fov(vertical_fov.to_radians(), width / height, 0.1, 100.0).unwrap()
    }

    fn random_invertible(rng: &mut StdRng) -> Matrix4x4 {
        // Diagonally dominant, so well conditioned
        let mut m = Matrix4x4::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let value: f64 = rng.gen_range(-1.0..1.0);
                m[(row, col)] = if row == col { value + 5.0 } else { value };
            }
        }
        m
    }

    fn random_matrix(rng: &mut StdRng) -> Matrix4x4 {
        Matrix4x4::from_elements(std::array::from_fn(|_| rng.gen_range(-10.0..10.0)))
    }

    fn assert_matrix_eq(a: &Matrix4x4, b: &Matrix4x4, eps: f64) {
        for (i, (x, y)) in a.elements().iter().zip(b.elements()).enumerate() {
            assert!((x - y).abs() < eps, "element {} differs: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Matrix4x4::default(), Matrix4x4::ZERO);
        assert_eq!(Matrix4x4::new(), Matrix4x4::ZERO);
    }

    #[test]
    fn test_set_identity() {
        let mut m = Matrix4x4::from_elements([3.0; 16]);
        m.set_identity();
        assert_eq!(m, Matrix4x4::IDENTITY);

        let a = Matrix4x4::from_elements(std::array::from_fn(|i| i as f64));
        assert_eq!(a * Matrix4x4::IDENTITY, a);
        assert_eq!(Matrix4x4::IDENTITY * a, a);
    }

    #[test]
    fn test_add_sub() {
        let a = Matrix4x4::from_elements(std::array::from_fn(|i| i as f64));
        let b = Matrix4x4::from_elements([1.0; 16]);

        let sum = a + b;
        assert_eq!(sum.element(0, 0), Ok(1.0));
        assert_eq!(sum.element(3, 3), Ok(16.0));
        assert_eq!(sum - b, a);
        // Operands are left untouched
        assert_eq!(a.element(3, 3), Ok(15.0));
    }

    #[test]
    fn test_mul() {
        let a = Matrix4x4::from_elements([
            1.0, 2.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 3.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let b = Matrix4x4::from_elements([
            2.0, 0.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 2.0, 0.0, //
            0.0, 0.0, 1.0, 1.0,
        ]);
        let c = a * b;

        assert_eq!(c.row(0), Ok(Vector4::new(4.0, 2.0, 0.0, 0.0)));
        assert_eq!(c.row(1), Ok(Vector4::new(1.0, 1.0, 0.0, 0.0)));
        assert_eq!(c.row(2), Ok(Vector4::new(0.0, 0.0, 5.0, 3.0)));
        assert_eq!(c.row(3), Ok(Vector4::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_mul_vector() {
        let m = Matrix4x4::from_elements(std::array::from_fn(|i| i as f64));
        let v = m.mul_xyzw(1.0, 0.0, 0.0, 1.0);
        // Row-dot product picks columns 0 and 3
        assert_eq!(v, Vector4::new(3.0, 11.0, 19.0, 27.0));
    }

    #[test]
    fn test_ring_laws() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..100 {
            let a = random_matrix(&mut rng);
            let b = random_matrix(&mut rng);
            let c = random_matrix(&mut rng);
            let v = Vector4::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );

            assert_eq!(a + b, b + a);
            assert_matrix_eq(&((a + b) + c), &(a + (b + c)), 1e-9);
            assert_eq!(a + Matrix4x4::ZERO, a);
            assert_eq!(a - a, Matrix4x4::ZERO);
            assert_matrix_eq(&((a - b) + b), &a, 1e-9);
            assert_matrix_eq(&(a - b), &(a + (Matrix4x4::ZERO - b)), 1e-12);

            assert_matrix_eq(&((a * b) * c), &(a * (b * c)), 1e-7);
            assert_matrix_eq(&(a * (b + c)), &(a * b + a * c), 1e-9);
            assert_matrix_eq(&((a + b) * c), &(a * c + b * c), 1e-9);
            assert_eq!(a * Matrix4x4::IDENTITY, a);

            let lhs = (a * b) * v;
            let rhs = a * (b * v);
            assert!((lhs - rhs).length() < 1e-8);
        }
    }

    #[test]
    fn test_element_access() {
        let mut m = Matrix4x4::IDENTITY;
        assert_eq!(m.element(2, 2), Ok(1.0));
        assert_eq!(
            m.element(4, 0),
            Err(MathError::InvalidIndex { index: 4, len: 4 })
        );
        assert_eq!(
            m.element(0, 4),
            Err(MathError::InvalidIndex { index: 4, len: 4 })
        );
        m.set_element(1, 3, 2.5).unwrap();
        assert_eq!(m[(1, 3)], 2.5);
        assert!(m.set_element(1, 7, 0.0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        // (0, 5) would alias (1, 1) without the column check
        let _ = Matrix4x4::IDENTITY[(0, 5)];
    }

    #[test]
    fn test_transpose() {
        let m = Matrix4x4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let t = m.transpose();
        assert_eq!(t.element(0, 3), Ok(1.0));
        assert_eq!(t.element(2, 3), Ok(3.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_invert_known_matrix() {
        let m = Matrix4x4::from_elements([
            2.0, 0.0, 0.0, 1.0, //
            0.0, 3.0, 0.0, 2.0, //
            0.0, 0.0, 4.0, 3.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let expected = Matrix4x4::from_elements([
            0.5, 0.0, 0.0, -0.5, //
            0.0, 1.0 / 3.0, 0.0, -2.0 / 3.0, //
            0.0, 0.0, 0.25, -0.75, //
            0.0, 0.0, 0.0, 1.0,
        ]);

        assert!((m.determinant() - 24.0).abs() < EPSILON);
        assert_matrix_eq(&m.inverse(), &expected, 1e-12);
        assert_matrix_eq(&(m * m.inverse()), &Matrix4x4::IDENTITY, 1e-12);
    }

    #[test]
    fn test_inverse_of_inverse() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let m = random_invertible(&mut rng);
            assert_matrix_eq(&m.inverse().inverse(), &m, EPSILON);
        }
    }

    #[test]
    fn test_inverse_matches_glam() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let m = random_invertible(&mut rng);
            // Row-major elements read as columns give the transpose, and the
            // inverse of the transpose is the transpose of the inverse.
            let oracle = glam::DMat4::from_cols_array(m.elements()).inverse();
            let expected = Matrix4x4::from_elements(oracle.to_cols_array());
            assert_matrix_eq(&m.inverse(), &expected, 1e-9);
        }
    }

    #[test]
    fn test_invert_singular_is_not_finite() {
        let mut m = Matrix4x4::from_elements([1.0; 16]);
        assert_eq!(m.determinant(), 0.0);
        m.invert();
        assert!(m.elements().iter().any(|e| !e.is_finite()));
    }

    #[test]
    fn test_translate() {
        let mut m = Matrix4x4::IDENTITY;
        m.translate(1.0, 2.0, 3.0);
        m.translate(1.0, 1.0, 1.0);
        assert_eq!(m.row(3), Ok(Vector4::new(2.0, 3.0, 4.0, 1.0)));
        assert_eq!(
            Matrix4x4::from_translation(Vector3::new(2.0, 3.0, 4.0)),
            m
        );
    }

    #[test]
    fn test_look_at() {
        let position = Vector3::new(0.0, 0.0, 3.0);
        let forward_direction = Vector3::new(0.0, 0.0, -1.0);

        let view = Matrix4x4::look_at(position, position + forward_direction, Vector3::Y);

        assert_eq!(view.element(0, 0), Ok(1.0));
        assert_eq!(view.element(0, 1).unwrap().abs(), 0.0);
        assert_eq!(view.element(0, 2).unwrap().abs(), 0.0);
        assert_eq!(view.element(0, 3).unwrap().abs(), 0.0);

        assert_eq!(view.element(1, 0).unwrap().abs(), 0.0);
        assert_eq!(view.element(1, 1), Ok(1.0));
        assert_eq!(view.element(1, 2).unwrap().abs(), 0.0);
        assert_eq!(view.element(1, 3).unwrap().abs(), 0.0);

        assert_eq!(view.element(2, 0).unwrap().abs(), 0.0);
        assert_eq!(view.element(2, 1).unwrap().abs(), 0.0);
        assert_eq!(view.element(2, 2), Ok(1.0));
        assert_eq!(view.element(2, 3).unwrap().abs(), 0.0);

        assert_eq!(view.element(3, 0).unwrap().abs(), 0.0);
        assert_eq!(view.element(3, 1).unwrap().abs(), 0.0);
        assert_eq!(view.element(3, 2), Ok(-3.0));
        assert_eq!(view.element(3, 3), Ok(1.0));
    }

    #[test]
    fn test_perspective_fov() {
        let projection = reference_projection();

        assert!((projection[(0, 0)] - 1.3579951288348662).abs() < EPSILON);
        assert!((projection[(1, 1)] - 2.414213562373095).abs() < EPSILON);
        assert!((projection[(2, 2)] - -1.002002002002002).abs() < EPSILON);
        assert_eq!(projection[(2, 3)], -1.0);
        assert!((projection[(3, 2)] - -0.20020020020020018).abs() < EPSILON);
        assert_eq!(projection[(3, 3)], 0.0);

        for (row, col) in [(0, 1), (0, 2), (0, 3), (1, 0), (1, 2), (1, 3), (2, 0), (2, 1)] {
            assert_eq!(projection[(row, col)], 0.0);
        }
    }

    #[test]
    fn test_perspective_fov_inverse() {
        let inverse = reference_projection().inverse();

        assert!((inverse[(0, 0)] - 0.7363796664410578).abs() < EPSILON);
        assert!((inverse[(1, 1)] - 0.41421356237309503).abs() < EPSILON);
        assert_eq!(inverse[(2, 2)].abs(), 0.0);
        assert!((inverse[(2, 3)] - -4.995).abs() < EPSILON);
        assert!((inverse[(3, 2)] - -0.9999999999999999).abs() < EPSILON);
        assert!((inverse[(3, 3)] - 5.005).abs() < EPSILON);
    }

    #[test]
    fn test_perspective_fov_rejects_degenerate_input() {
        assert_eq!(
            Matrix4x4::perspective_fov(1.0, 0.0, 0.1, 100.0),
            Err(MathError::DegenerateAspect)
        );
        assert_eq!(
            Matrix4x4::perspective_fov(1.0, 1.5, 10.0, 10.0),
            Err(MathError::DegenerateClipPlanes {
                near: 10.0,
                far: 10.0
            })
        );
    }
}
