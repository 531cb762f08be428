//! Flat-shaded boxes: a closed outward box and an open inward room

use glam::Vec3;
use tracing::debug;

use crate::error::{GeometryError, require_positive};
use crate::procedural::types::{MeshBuilder, MeshBuilderColor};

/// Per-corner UVs: the face covers the full 0..1 square
const FACE_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Back face UVs, turned half a revolution
const BACK_UVS: [(f32, f32); 4] = [(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)];

/// Axis-aligned face of a unit box
///
/// Corners are sign vectors scaled by the half extents, listed
/// counter-clockwise as seen from outside the box, each with its UV.
struct BoxFace {
    normal: Vec3,
    corners: [Vec3; 4],
    uvs: [(f32, f32); 4],
}

const FRONT: BoxFace = BoxFace {
    normal: Vec3::Z,
    corners: [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ],
    uvs: FACE_UVS,
};

const BACK: BoxFace = BoxFace {
    normal: Vec3::NEG_Z,
    corners: [
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
    ],
    uvs: BACK_UVS,
};

const RIGHT: BoxFace = BoxFace {
    normal: Vec3::X,
    corners: [
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ],
    uvs: FACE_UVS,
};

const LEFT: BoxFace = BoxFace {
    normal: Vec3::NEG_X,
    corners: [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    uvs: FACE_UVS,
};

const TOP: BoxFace = BoxFace {
    normal: Vec3::Y,
    corners: [
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    uvs: FACE_UVS,
};

const BOTTOM: BoxFace = BoxFace {
    normal: Vec3::NEG_Y,
    corners: [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ],
    uvs: FACE_UVS,
};


/// Room wall colors
///
/// | index | surface |
/// |---|---|
/// | 0 | left wall (-X), red |
/// | 1 | right wall (+X), green |
/// | 2 | ceiling |
/// | 3 | floor |
/// | 4 | back wall |
pub const ROOM_PALETTE: [Vec3; 5] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.96, 0.93, 0.85),
    Vec3::new(0.64, 0.64, 0.64),
    Vec3::new(0.76, 0.74, 0.68),
];

/// Generate an axis-aligned box centered at the origin
///
/// # Arguments
/// * `width` - Extent along X (> 0.0)
/// * `height` - Extent along Y (> 0.0)
/// * `depth` - Extent along Z (> 0.0)
///
/// # Returns
/// 24 vertices (4 per face, unshared so every face keeps a flat normal) and
/// 36 indices, faces in the order front, back, right, left, top, bottom.
///
/// # UV Mapping
/// Each face covers the full 0..1 square; the back face's mapping is turned
/// 180° relative to the others.
pub fn generate_box<M: MeshBuilder>(width: f32, height: f32, depth: f32) -> Result<M, GeometryError> {
    let half = half_extents("box", width, height, depth)?;

    let mut mesh = M::default();
    for face in [&FRONT, &BACK, &RIGHT, &LEFT, &TOP, &BOTTOM] {
        let base = add_face(&mut mesh, face, half);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 2, base + 3, base);
    }

    debug!(width, height, depth, vertices = mesh.vertex_count(), "generated box");
    Ok(mesh)
}

/// Generate an open room seen from inside, in the style of a Cornell box
///
/// # Arguments
/// * `width` - Extent along X (> 0.0)
/// * `height` - Extent along Y (> 0.0)
/// * `depth` - Extent along Z (> 0.0)
///
/// # Returns
/// Five faces (back, right, left, top, bottom; the +Z side stays open), 20
/// vertices and 30 indices. Normals point into the room and the winding is
/// reversed relative to [`generate_box`], so the inside faces the viewer.
/// Every vertex carries its wall color from [`ROOM_PALETTE`].
pub fn generate_room<M: MeshBuilderColor>(
    width: f32,
    height: f32,
    depth: f32,
) -> Result<M, GeometryError> {
    let half = half_extents("room", width, height, depth)?;

    let walls = [
        (&BACK, ROOM_PALETTE[4]),
        (&RIGHT, ROOM_PALETTE[1]),
        (&LEFT, ROOM_PALETTE[0]),
        (&TOP, ROOM_PALETTE[2]),
        (&BOTTOM, ROOM_PALETTE[3]),
    ];

    let mut mesh = M::default();
    for (face, color) in walls {
        let base = add_inward_face(&mut mesh, face, half, color);
        mesh.add_triangle(base + 2, base + 1, base);
        mesh.add_triangle(base, base + 3, base + 2);
    }

    debug!(width, height, depth, vertices = mesh.vertex_count(), "generated room");
    Ok(mesh)
}

fn half_extents(shape: &'static str, width: f32, height: f32, depth: f32) -> Result<Vec3, GeometryError> {
    let width = require_positive(shape, "width", width)?;
    let height = require_positive(shape, "height", height)?;
    let depth = require_positive(shape, "depth", depth)?;
    Ok(Vec3::new(width, height, depth) * 0.5)
}

/// Emit the four corners of `face`, returning the index of the first
fn add_face<M: MeshBuilder>(mesh: &mut M, face: &BoxFace, half: Vec3) -> u32 {
    let base = mesh.add_vertex(face.corners[0] * half, face.uvs[0], face.normal);
    for (corner, uv) in face.corners[1..].iter().zip(&face.uvs[1..]) {
        mesh.add_vertex(*corner * half, *uv, face.normal);
    }
    base
}

/// Emit the four corners of `face` with a flipped normal and a flat color
fn add_inward_face<M: MeshBuilderColor>(mesh: &mut M, face: &BoxFace, half: Vec3, color: Vec3) -> u32 {
    let normal = -face.normal;
    let base = mesh.add_vertex_color(face.corners[0] * half, face.uvs[0], normal, color);
    for (corner, uv) in face.corners[1..].iter().zip(&face.uvs[1..]) {
        mesh.add_vertex_color(*corner * half, *uv, normal, color);
    }
    base
}
