//! Intersection record shared by the trace and closest-hit stages.

use pk_math::Vector3;

/// Object index of a record that hit nothing.
pub const EMPTY_OBJECT_INDEX: i32 = -1;
/// Material index of a record that hit nothing.
pub const EMPTY_MATERIAL_INDEX: i32 = -1;
/// Distance of a record that has not found any hit yet.
pub const MAX_DISTANCE: f64 = f64::MAX;

/// Record of a ray-primitive intersection.
///
/// `distance`, `object_index` and `material_index` are filled by the
/// intersection scan; `world_position` and `world_normal` only once the
/// closest hit has been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub object_index: i32,
    pub material_index: i32,
    pub distance: f64,
    pub world_position: Vector3,
    pub world_normal: Vector3,
}

impl HitRecord {
    /// A record that has hit nothing.
    pub const fn miss() -> Self {
        Self {
            object_index: EMPTY_OBJECT_INDEX,
            material_index: EMPTY_MATERIAL_INDEX,
            distance: MAX_DISTANCE,
            world_position: Vector3::ZERO,
            world_normal: Vector3::ZERO,
        }
    }

    /// True if the record refers to a primitive.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.object_index != EMPTY_OBJECT_INDEX
    }

    /// The closer of two records. Ties keep `self`.
    #[inline]
    pub fn nearer(self, other: Self) -> Self {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::miss()
    }
}
