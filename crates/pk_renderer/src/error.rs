//! Error types for scene validation and rendering.

use pk_math::MathError;
use thiserror::Error;

/// Inconsistent scene data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("Primitive at position {position} has object index {object_index}")]
    ObjectIndexMismatch { position: usize, object_index: i32 },

    #[error("Primitive {object_index} references material {material_index}, but the scene has {material_count} materials")]
    MaterialOutOfRange {
        object_index: i32,
        material_index: i32,
        material_count: usize,
    },
}

/// Errors returned by the renderer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("Camera holds {actual} ray directions, expected {expected}")]
    ViewportMismatch { expected: usize, actual: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;
