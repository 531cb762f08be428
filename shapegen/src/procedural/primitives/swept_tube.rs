//! Circular tube swept along a Bezier curve

use glam::Vec3;
use std::f32::consts::TAU;
use tracing::debug;

use crate::error::{GeometryError, require_indexable, require_positive, require_segments};
use crate::procedural::curve::{sample_bezier, validate_control_points};
use crate::procedural::frame::{Frame, build_frames};
use crate::procedural::types::MeshBuilder;

/// Largest V increment contributed by a single path segment
const MAX_V_STEP: f32 = 1.0;

/// Generate a tube of constant radius along a Bezier curve
///
/// # Arguments
/// * `segments` - Vertices per cross-section ring (min 3)
/// * `control_points` - Bezier control polygon (at least 2 finite points)
/// * `bezier_segments` - Path subdivisions; the path has `bezier_segments + 1` samples (min 1)
/// * `radius` - Tube radius (> 0.0)
///
/// # Returns
/// `(bezier_segments + 1) × segments` ring vertices followed by two caps of
/// `segments + 2` vertices each (end cap first, then start cap), and
/// `6 × segments × (bezier_segments + 1)` indices. Side normals point away
/// from the path; cap normals point along the path at the end and against it
/// at the start.
///
/// # UV Mapping
/// - Side: U = i / segments around the ring; V grows with path length,
///   at most 1.0 per path segment
/// - Caps: planar disc mapping, center at (0.5, 0.5)
///
/// # Errors
/// Fails on a bad parameter, or with [`GeometryError::DegeneratePath`] when
/// all control points coincide.
pub fn generate_swept_tube<M: MeshBuilder>(
    segments: u32,
    control_points: &[Vec3],
    bezier_segments: u32,
    radius: f32,
) -> Result<M, GeometryError> {
    let segments = require_segments("tube", "segments", segments, 3)?;
    let bezier_segments = require_segments("tube", "bezier_segments", bezier_segments, 1)?;
    let radius = require_positive("tube", "radius", radius)?;
    validate_control_points(control_points)?;

    let rings = u64::from(bezier_segments) + 1;
    require_indexable("tube", rings * u64::from(segments) + 2 * (u64::from(segments) + 2))?;

    let path = sample_bezier(control_points, bezier_segments)?;
    let frames = build_frames(&path)?;

    let mut mesh = M::default();

    let mut v = 0.0f32;
    for (k, (center, frame)) in path.iter().zip(&frames).enumerate() {
        if k > 0 {
            v += center.distance(path[k - 1]).min(MAX_V_STEP);
        }
        for i in 0..segments {
            let angle = i as f32 / segments as f32 * TAU;
            let position = frame.ring_point(*center, radius, angle);
            let normal = (position - *center).normalize();
            mesh.add_vertex(position, (i as f32 / segments as f32, v), normal);
        }
    }

    for ring in 0..bezier_segments {
        let base = ring * segments;
        for i in 0..segments {
            let next = (i + 1) % segments;
            mesh.add_triangle(base + i, base + next, base + segments + next);
            mesh.add_triangle(base + segments + next, base + segments + i, base + i);
        }
    }

    let (first, last) = (0, path.len() - 1);
    add_cap(&mut mesh, path[last], &frames[last], radius, segments, true);
    add_cap(&mut mesh, path[first], &frames[first], radius, segments, false);

    debug!(
        segments,
        bezier_segments,
        radius,
        control_points = control_points.len(),
        vertices = mesh.vertex_count(),
        "generated swept tube"
    );
    Ok(mesh)
}

/// Close one end of the tube with a triangle fan
///
/// Emits a center vertex and `segments + 1` rim vertices; the extra rim
/// vertex sits at angle 2π on top of the first so the fan closes without an
/// index wrap. The end cap faces along `frame.forward`, the start cap against it.
fn add_cap<M: MeshBuilder>(
    mesh: &mut M,
    center: Vec3,
    frame: &Frame,
    radius: f32,
    segments: u32,
    at_end: bool,
) {
    let normal = if at_end { frame.forward } else { -frame.forward };
    let hub = mesh.add_vertex(center, (0.5, 0.5), normal);

    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin_angle, cos_angle) = angle.sin_cos();
        let position = frame.ring_point(center, radius, angle);
        mesh.add_vertex(position, (cos_angle * 0.5 + 0.5, sin_angle * 0.5 + 0.5), normal);
    }

    for i in 0..segments {
        let rim = hub + 1 + i;
        if at_end {
            mesh.add_triangle(hub, rim, rim + 1);
        } else {
            mesh.add_triangle(hub, rim + 1, rim);
        }
    }
}
