//! PK Renderer - progressive CPU path tracing
//!
//! A Monte Carlo path tracer for scenes of implicit spheres. Every frame
//! traces one diffuse sample per pixel and folds it into a running average,
//! so the image refines as frames accumulate.

mod camera;
mod color;
pub mod demo;
mod error;
mod hit;
mod image_buffer;
pub mod intersect;
mod material;
mod primitive;
mod ray;
mod renderer;
pub mod sampling;
mod scene;

pub use camera::{Camera, CameraInput, Key, MOVE_SPEED, ROTATION_SPEED};
pub use color::{convert_from_rgba, convert_to_rgba, Rgba8, MAX_RGB, MIN_RGB};
pub use error::{RenderError, RenderResult, SceneError};
pub use hit::{HitRecord, EMPTY_MATERIAL_INDEX, EMPTY_OBJECT_INDEX, MAX_DISTANCE};
pub use image_buffer::ImageBuffer;
pub use intersect::{closest_hit, intersect};
pub use material::{Color, Material};
pub use primitive::{Primitive, Shape, ShapeKind, Sphere, Triangle};
pub use ray::Ray;
pub use renderer::{RenderConfig, Renderer, RENDER_EPSILON};
pub use scene::Scene;

/// Re-export the math types used throughout the public API
pub use pk_math::{Matrix4x4, Vector2, Vector3, Vector4};
