//! Capped cylinder with hard edges between caps and side

use glam::Vec3;
use std::f32::consts::TAU;
use tracing::debug;

use crate::error::{GeometryError, require_indexable, require_positive, require_segments};
use crate::procedural::types::MeshBuilder;

/// Generate a closed cylinder around the Y axis, centered at the origin
///
/// # Arguments
/// * `segments` - Number of radial divisions (min 3)
/// * `height` - Extent along Y (> 0.0)
/// * `radius` - Radius of both caps (> 0.0)
///
/// # Returns
/// `2 + 4 × segments` vertices and `12 × segments` indices. Vertex 0 is the
/// bottom cap center, vertex 1 the top cap center. Each angular step `i` then
/// adds four vertices: bottom cap, bottom side, top cap, top side. Rim
/// positions appear twice so caps keep an axial normal while the side keeps
/// a radial one.
///
/// # UV Mapping
/// - Side: U = i / segments around the circumference, V = 0 at the bottom and 1 at the top
/// - Caps: planar projection of the disc into the unit square, center at (0.5, 0.5)
///
/// The side has no duplicate seam column, so the last quad interpolates U
/// from (segments - 1) / segments back to 0.
pub fn generate_cylinder<M: MeshBuilder>(
    segments: u32,
    height: f32,
    radius: f32,
) -> Result<M, GeometryError> {
    let segments = require_segments("cylinder", "segments", segments, 3)?;
    let height = require_positive("cylinder", "height", height)?;
    let radius = require_positive("cylinder", "radius", radius)?;
    require_indexable("cylinder", 2 + 4 * u64::from(segments))?;

    let mut mesh = M::default();
    let half_height = height * 0.5;

    let bottom_center = mesh.add_vertex(Vec3::new(0.0, -half_height, 0.0), (0.5, 0.5), Vec3::NEG_Y);
    let top_center = mesh.add_vertex(Vec3::new(0.0, half_height, 0.0), (0.5, 0.5), Vec3::Y);

    for i in 0..segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let u = i as f32 / segments as f32;

        let radial = Vec3::new(cos_theta, 0.0, sin_theta);
        let bottom = Vec3::new(radius * cos_theta, -half_height, radius * sin_theta);
        let top = Vec3::new(radius * cos_theta, half_height, radius * sin_theta);
        let cap_uv = (cos_theta * 0.5 + 0.5, sin_theta * 0.5 + 0.5);

        mesh.add_vertex(bottom, cap_uv, Vec3::NEG_Y);
        mesh.add_vertex(bottom, (u, 0.0), radial);
        mesh.add_vertex(top, cap_uv, Vec3::Y);
        mesh.add_vertex(top, (u, 1.0), radial);
    }

    let bottom_cap = |i: u32| 2 + 4 * i;
    let bottom_side = |i: u32| 3 + 4 * i;
    let top_cap = |i: u32| 4 + 4 * i;
    let top_side = |i: u32| 5 + 4 * i;

    for i in 0..segments {
        let next = (i + 1) % segments;

        mesh.add_triangle(bottom_center, bottom_cap(i), bottom_cap(next));
        mesh.add_triangle(top_center, top_cap(next), top_cap(i));

        mesh.add_triangle(bottom_side(i), top_side(next), bottom_side(next));
        mesh.add_triangle(top_side(next), bottom_side(i), top_side(i));
    }

    debug!(segments, height, radius, vertices = mesh.vertex_count(), "generated cylinder");
    Ok(mesh)
}
