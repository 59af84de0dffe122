//! Ray type for path tracing.

use pk_math::Vector3;

/// A ray with an origin and a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Vector3,
    /// Direction vector (camera rays are normalized, nothing relies on it)
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vector3::ZERO,
            direction: Vector3::ZERO,
        }
    }
}
