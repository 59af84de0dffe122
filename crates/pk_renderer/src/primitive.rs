//! Scene primitives.
//!
//! A [`Primitive`] pairs a [`Shape`] with the object and material indices the
//! scene assigns to it. Shapes form a closed set so intersection and
//! closest-hit dispatch are exhaustive matches.

use crate::hit::{EMPTY_MATERIAL_INDEX, EMPTY_OBJECT_INDEX};
use pk_math::Vector3;

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Triangle,
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Vector3,
    pub radius: f64,
}

impl Sphere {
    /// Smallest radius a sphere is constructed with.
    pub const MIN_RADIUS: f64 = 0.2;

    /// Create a new sphere. Radii below [`Sphere::MIN_RADIUS`] are raised to it.
    pub fn new(position: Vector3, radius: f64) -> Self {
        Self {
            position,
            radius: radius.max(Self::MIN_RADIUS),
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Self::MIN_RADIUS)
    }
}

/// A triangle. Reserved: rays never hit it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub v0: Vector3,
    pub v1: Vector3,
    pub v2: Vector3,
}

impl Triangle {
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Self { v0, v1, v2 }
    }
}

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// A shape placed in a scene.
///
/// Both indices stay at the empty sentinel (`-1`) until the scene assigns
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub object_index: i32,
    pub material_index: i32,
    pub shape: Shape,
}

impl Primitive {
    /// Wrap a shape with unassigned indices.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            object_index: EMPTY_OBJECT_INDEX,
            material_index: EMPTY_MATERIAL_INDEX,
            shape: shape.into(),
        }
    }

    /// Set the material index.
    pub fn with_material(mut self, material_index: i32) -> Self {
        self.material_index = material_index;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}
