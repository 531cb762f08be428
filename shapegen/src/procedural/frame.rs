//! Orthonormal frames along a sampled path
//!
//! Each sample gets a `forward` direction toward the next sample and a
//! perpendicular `right`/`up` pair derived from a fixed reference axis. This
//! is not a rotation-minimizing frame: the basis can twist where the path
//! turns toward the reference axis.

use glam::Vec3;
use tracing::debug;

use crate::error::GeometryError;

/// Axis crossed with `forward` to produce `right`
pub const REFERENCE_AXIS: Vec3 = Vec3::Z;

/// Replacement reference axis when `forward` is parallel to [`REFERENCE_AXIS`]
pub const FALLBACK_AXIS: Vec3 = Vec3::Y;

/// Cross products shorter than this count as parallel
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Orthonormal basis at one path sample
///
/// `(forward, right, up)` is right-handed: `up = forward × right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Frame {
    /// Build the basis for a unit `forward` direction
    pub fn from_forward(forward: Vec3) -> Self {
        let mut side = REFERENCE_AXIS.cross(forward);
        if side.length() < PARALLEL_EPSILON {
            debug!(?forward, "forward is parallel to the reference axis, using fallback axis");
            side = FALLBACK_AXIS.cross(forward);
        }
        let right = side.normalize();
        let up = forward.cross(right).normalize();
        Self { forward, right, up }
    }

    /// Point on the circle of `radius` around `center` in the right/up plane
    pub fn ring_point(&self, center: Vec3, radius: f32, angle: f32) -> Vec3 {
        center + self.right * (angle.cos() * radius) + self.up * (angle.sin() * radius)
    }
}

/// Build one frame per path point
///
/// Forward at point `k` looks at point `k + 1`; the last point continues the
/// direction of the final segment. Zero-length segments borrow the nearest
/// usable direction (the previous one, or the next one at the start).
///
/// # Errors
/// - [`GeometryError::TooFewControlPoints`] for fewer than 2 points
/// - [`GeometryError::DegeneratePath`] if every point coincides
pub fn build_frames(path: &[Vec3]) -> Result<Vec<Frame>, GeometryError> {
    if path.len() < 2 {
        return Err(GeometryError::TooFewControlPoints(path.len()));
    }

    // One direction per segment; the last point reuses the final segment.
    let segments: Vec<Option<Vec3>> = path
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).try_normalize())
        .collect();

    let Some(first) = segments.iter().flatten().copied().next() else {
        return Err(GeometryError::DegeneratePath(path.len()));
    };

    let mut forwards = Vec::with_capacity(path.len());
    let mut current = first;
    for direction in &segments {
        if let Some(direction) = direction {
            current = *direction;
        }
        forwards.push(current);
    }
    forwards.push(current);

    Ok(forwards.into_iter().map(Frame::from_forward).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(frame: &Frame) {
        for axis in [frame.forward, frame.right, frame.up] {
            assert!(axis.is_finite());
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(frame.forward.dot(frame.right).abs() < 1e-5);
        assert!(frame.forward.dot(frame.up).abs() < 1e-5);
        assert!(frame.right.dot(frame.up).abs() < 1e-5);
        assert!((frame.forward.cross(frame.right) - frame.up).length() < 1e-5);
    }

    #[test]
    fn test_straight_line_along_x() {
        let path = [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
        let frames = build_frames(&path).unwrap();

        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert_orthonormal(frame);
            assert!((frame.forward - Vec3::X).length() < 1e-6);
            assert!((frame.right - Vec3::Y).length() < 1e-6);
            assert!((frame.up - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_last_frame_continues_final_segment() {
        let path = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        let frames = build_frames(&path).unwrap();

        assert!((frames[0].forward - Vec3::X).length() < 1e-6);
        assert!((frames[1].forward - Vec3::Y).length() < 1e-6);
        assert!((frames[2].forward - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_path_parallel_to_reference_axis_uses_fallback() {
        let path = [Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 2.0)];
        let frames = build_frames(&path).unwrap();

        for frame in &frames {
            assert_orthonormal(frame);
            assert!((frame.right - FALLBACK_AXIS.cross(Vec3::Z)).length() < 1e-6);
        }

        let reversed = build_frames(&[Vec3::Z, Vec3::ZERO]).unwrap();
        for frame in &reversed {
            assert_orthonormal(frame);
        }
    }

    #[test]
    fn test_repeated_points_borrow_neighbor_direction() {
        let path = [Vec3::ZERO, Vec3::ZERO, Vec3::X, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        let frames = build_frames(&path).unwrap();

        assert_eq!(frames.len(), 5);
        assert!((frames[0].forward - Vec3::X).length() < 1e-6);
        assert!((frames[1].forward - Vec3::X).length() < 1e-6);
        assert!((frames[2].forward - Vec3::X).length() < 1e-6);
        assert!((frames[3].forward - Vec3::Y).length() < 1e-6);
        assert!((frames[4].forward - Vec3::Y).length() < 1e-6);
        frames.iter().for_each(assert_orthonormal);
    }

    #[test]
    fn test_coincident_path_is_rejected() {
        let path = [Vec3::ONE; 4];
        assert_eq!(build_frames(&path), Err(GeometryError::DegeneratePath(4)));
        assert_eq!(
            build_frames(&[Vec3::ONE]),
            Err(GeometryError::TooFewControlPoints(1))
        );
    }

    #[test]
    fn test_ring_point_lies_on_circle() {
        let frame = Frame::from_forward(Vec3::new(1.0, 1.0, 1.0).normalize());
        let center = Vec3::new(0.5, -0.25, 2.0);

        for step in 0..12 {
            let angle = step as f32 * std::f32::consts::TAU / 12.0;
            let point = frame.ring_point(center, 0.3, angle);
            assert!(((point - center).length() - 0.3).abs() < 1e-5);
            assert!((point - center).dot(frame.forward).abs() < 1e-5);
        }
    }
}
