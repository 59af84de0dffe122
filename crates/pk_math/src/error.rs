//! Error types for vector and matrix operations.

use thiserror::Error;

/// Errors raised by the math types.
///
/// Numerical degeneration (normalizing a zero vector, inverting a singular
/// matrix) is not an error; it yields non-finite components instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Index out of bounds: {index} (valid range is 0..{len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("Aspect ratio must be non-zero")]
    DegenerateAspect,

    #[error("Far clip plane ({far}) can't be the same as near clip plane ({near})")]
    DegenerateClipPlanes { near: f64, far: f64 },
}

pub type MathResult<T> = Result<T, MathError>;
