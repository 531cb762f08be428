//! UV sphere with single pole vertices

use glam::Vec3;
use std::f32::consts::{PI, TAU};
use tracing::debug;

use crate::error::{GeometryError, require_indexable, require_positive, require_segments};
use crate::procedural::types::MeshBuilder;

/// Generate a UV sphere centered at the origin
///
/// # Arguments
/// * `longitude_segments` - Divisions around the Y axis (min 3)
/// * `latitude_segments` - Divisions from pole to pole (min 2)
/// * `radius` - Sphere radius (> 0.0)
///
/// # Returns
/// `2 + (latitude_segments - 1) × longitude_segments` vertices and
/// `6 × (latitude_segments - 1) × longitude_segments` indices. Vertex 0 is the
/// north pole (+Y), vertex 1 the south pole; interior ring `i`, column `j`
/// sits at index `2 + (i - 1) × longitude_segments + j`.
///
/// # UV Mapping
/// - U: longitude / 2π, wrapping without a duplicate seam column
/// - V: polar angle / π, 0 at the north pole and 1 at the south pole
pub fn generate_sphere<M: MeshBuilder>(
    longitude_segments: u32,
    latitude_segments: u32,
    radius: f32,
) -> Result<M, GeometryError> {
    let longitude = require_segments("sphere", "longitude_segments", longitude_segments, 3)?;
    let latitude = require_segments("sphere", "latitude_segments", latitude_segments, 2)?;
    let radius = require_positive("sphere", "radius", radius)?;
    require_indexable(
        "sphere",
        2 + u64::from(latitude - 1) * u64::from(longitude),
    )?;

    let mut mesh = M::default();

    let north = mesh.add_vertex(Vec3::new(0.0, radius, 0.0), (0.0, 0.0), Vec3::Y);
    let south = mesh.add_vertex(Vec3::new(0.0, -radius, 0.0), (0.0, 1.0), Vec3::NEG_Y);

    for ring in 1..latitude {
        let polar = ring as f32 / latitude as f32 * PI;
        let (sin_polar, cos_polar) = polar.sin_cos();

        for column in 0..longitude {
            let azimuth = column as f32 / longitude as f32 * TAU;
            let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();

            let normal = Vec3::new(sin_polar * cos_azimuth, cos_polar, sin_polar * sin_azimuth);
            let uv = (azimuth / TAU, polar / PI);
            mesh.add_vertex(normal * radius, uv, normal.normalize());
        }
    }

    let ring_vertex = |ring: u32, column: u32| 2 + (ring - 1) * longitude + column % longitude;
    let last_ring = latitude - 1;

    for column in 0..longitude {
        let next = column + 1;

        // North fan
        mesh.add_triangle(north, ring_vertex(1, next), ring_vertex(1, column));

        // Bands between consecutive interior rings
        for ring in 2..=last_ring {
            let prev = ring - 1;
            mesh.add_triangle(
                ring_vertex(ring, column),
                ring_vertex(prev, next),
                ring_vertex(ring, next),
            );
            mesh.add_triangle(
                ring_vertex(prev, next),
                ring_vertex(ring, column),
                ring_vertex(prev, column),
            );
        }

        // South fan
        mesh.add_triangle(
            ring_vertex(last_ring, column),
            ring_vertex(last_ring, next),
            south,
        );
    }

    debug!(
        longitude_segments,
        latitude_segments,
        radius,
        vertices = mesh.vertex_count(),
        "generated sphere"
    );
    Ok(mesh)
}
