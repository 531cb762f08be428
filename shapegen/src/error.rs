//! Error types for mesh generation
//!
//! Generators reject bad parameters up front instead of clamping them, so a
//! returned mesh always satisfies the record invariants checked by
//! [`MeshData::validate`](crate::procedural::MeshData::validate).

use thiserror::Error;

/// Error produced by a generator, a curve helper, or record validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{shape}: {param} must be at least {min} (got {got})")]
    TooFewSegments {
        shape: &'static str,
        param: &'static str,
        min: u32,
        got: u32,
    },

    #[error("{shape}: {param} must be finite and > 0.0 (got {got})")]
    InvalidDimension {
        shape: &'static str,
        param: &'static str,
        got: f32,
    },

    #[error("Bezier curve needs at least 2 control points (got {0})")]
    TooFewControlPoints(usize),

    #[error("Bezier curve degree {degree} exceeds the supported maximum of {max}")]
    CurveDegreeTooHigh { degree: usize, max: usize },

    #[error("Control point {0} is not finite")]
    NonFiniteControlPoint(usize),

    #[error("Sweep path is degenerate: all {0} samples coincide")]
    DegeneratePath(usize),

    #[error("{shape}: {vertices} vertices do not fit a u32 index buffer")]
    IndexOverflow { shape: &'static str, vertices: u64 },

    #[error(
        "Attribute length mismatch: {positions} positions, {normals} normals, {uvs} uvs"
    )]
    AttributeMismatch {
        positions: usize,
        normals: usize,
        uvs: usize,
    },

    #[error("Color count {colors} does not match vertex count {vertices}")]
    ColorMismatch { colors: usize, vertices: usize },

    #[error("Index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    #[error("Index {index} at slot {slot} is out of range for {vertices} vertices")]
    IndexOutOfRange {
        index: u32,
        slot: usize,
        vertices: usize,
    },
}

/// Reject a segment count below `min`
pub(crate) fn require_segments(
    shape: &'static str,
    param: &'static str,
    got: u32,
    min: u32,
) -> Result<u32, GeometryError> {
    if got < min {
        return Err(GeometryError::TooFewSegments {
            shape,
            param,
            min,
            got,
        });
    }
    Ok(got)
}

/// Reject a size that is zero, negative, NaN or infinite
pub(crate) fn require_positive(
    shape: &'static str,
    param: &'static str,
    got: f32,
) -> Result<f32, GeometryError> {
    if !got.is_finite() || got <= 0.0 {
        return Err(GeometryError::InvalidDimension { shape, param, got });
    }
    Ok(got)
}

/// Reject vertex counts that overflow the `u32` index space
pub(crate) fn require_indexable(shape: &'static str, vertices: u64) -> Result<(), GeometryError> {
    if vertices > u64::from(u32::MAX) {
        return Err(GeometryError::IndexOverflow { shape, vertices });
    }
    Ok(())
}
