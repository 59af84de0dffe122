//! Scene container: primitives plus the materials they index into.

use crate::error::SceneError;
use crate::{Material, Primitive, Sphere};
use pk_math::Vector3;

/// An ordered list of primitives and an index-aligned list of materials.
///
/// A primitive's `object_index` is its position in [`Scene::primitives`] and
/// its `material_index` is a position in [`Scene::materials`]. The `add_*`
/// helpers keep both invariants; [`Scene::validate`] checks them for scenes
/// assembled by hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from raw parts without checking them.
    pub fn from_parts(primitives: Vec<Primitive>, materials: Vec<Material>) -> Self {
        Self {
            primitives,
            materials,
        }
    }

    /// Append a material and return its index.
    pub fn add_material(&mut self, material: Material) -> i32 {
        self.materials.push(material);
        (self.materials.len() - 1) as i32
    }

    /// Append a primitive, assigning its object index. Returns that index.
    pub fn add_primitive(&mut self, mut primitive: Primitive) -> i32 {
        let object_index = self.primitives.len() as i32;
        primitive.object_index = object_index;
        self.primitives.push(primitive);
        object_index
    }

    /// Append a sphere using `material_index`. Returns its object index.
    pub fn add_sphere(&mut self, position: Vector3, radius: f64, material_index: i32) -> i32 {
        let sphere = Sphere::new(position, radius);
        self.add_primitive(Primitive::new(sphere).with_material(material_index))
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Material at `index`, or `None` for the empty sentinel and out of range
    /// indices.
    pub fn material(&self, index: i32) -> Option<&Material> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.materials.get(index))
    }

    /// Primitive with the given object index.
    pub fn primitive(&self, object_index: i32) -> Option<&Primitive> {
        usize::try_from(object_index)
            .ok()
            .and_then(|index| self.primitives.get(index))
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Remove all primitives and materials.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.materials.clear();
    }

    /// Check that object indices match positions and material indices are in
    /// range.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (position, primitive) in self.primitives.iter().enumerate() {
            if usize::try_from(primitive.object_index) != Ok(position) {
                return Err(SceneError::ObjectIndexMismatch {
                    position,
                    object_index: primitive.object_index,
                });
            }
            if self.material(primitive.material_index).is_none() {
                return Err(SceneError::MaterialOutOfRange {
                    object_index: primitive.object_index,
                    material_index: primitive.material_index,
                    material_count: self.materials.len(),
                });
            }
        }
        Ok(())
    }
}
