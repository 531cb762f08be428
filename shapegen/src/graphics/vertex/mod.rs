//! Vertex format definitions and attribute layouts
//!
//! Describes how generated meshes are laid out for the upload step. Shader
//! locations are fixed regardless of format:
//! - Location 0: Position (Float32x3)
//! - Location 1: Normal (Float32x3, if FORMAT_NORMAL)
//! - Location 2: UV (Float32x2, if FORMAT_UV)
//! - Location 3: Color (Float32x3, if FORMAT_COLOR)


use crate::procedural::MeshData;

/// Vertex format flag: Has UV coordinates (2 floats)
pub const FORMAT_UV: u8 = 1;
/// Vertex format flag: Has per-vertex color (RGB, 3 floats)
pub const FORMAT_COLOR: u8 = 2;
/// Vertex format flag: Has normals (3 floats)
pub const FORMAT_NORMAL: u8 = 4;

/// All format flags combined
pub const FORMAT_ALL: u8 = FORMAT_UV | FORMAT_COLOR | FORMAT_NORMAL;

pub const LOCATION_POSITION: u32 = 0;
pub const LOCATION_NORMAL: u32 = 1;
pub const LOCATION_UV: u32 = 2;
pub const LOCATION_COLOR: u32 = 3;

/// Calculate interleaved vertex stride in bytes
#[inline]
pub const fn vertex_stride(format: u8) -> u32 {
    let mut stride = 12; // Position: Float32x3

    if format & FORMAT_NORMAL != 0 {
        stride += 12; // Normal: Float32x3
    }
    if format & FORMAT_UV != 0 {
        stride += 8; // UV: Float32x2
    }
    if format & FORMAT_COLOR != 0 {
        stride += 12; // Color: Float32x3
    }

    stride
}

/// Human-readable name for a format
pub const fn format_name(format: u8) -> &'static str {
    match format {
        0 => "POS",
        1 => "POS_UV",
        2 => "POS_COLOR",
        3 => "POS_UV_COLOR",
        4 => "POS_NORMAL",
        5 => "POS_UV_NORMAL",
        6 => "POS_COLOR_NORMAL",
        7 => "POS_UV_COLOR_NORMAL",
        _ => "UNKNOWN",
    }
}

/// One float attribute inside an interleaved vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader location
    pub location: u32,
    /// Number of f32 components
    pub components: u32,
    /// Byte offset from the start of the vertex
    pub offset: u32,
}

/// Attributes present in `format`, in interleaved order
pub fn vertex_attributes(format: u8) -> Vec<VertexAttribute> {
    let optional = [
        (FORMAT_NORMAL, LOCATION_NORMAL, 3),
        (FORMAT_UV, LOCATION_UV, 2),
        (FORMAT_COLOR, LOCATION_COLOR, 3),
    ];

    let mut attributes = vec![VertexAttribute {
        location: LOCATION_POSITION,
        components: 3,
        offset: 0,
    }];
    let mut offset = 12;
    for (flag, location, components) in optional {
        if format & flag != 0 {
            attributes.push(VertexAttribute {
                location,
                components,
                offset,
            });
            offset += components * 4;
        }
    }
    attributes
}

/// Format flags describing the attributes a mesh record carries
pub fn mesh_format(mesh: &MeshData) -> u8 {
    let mut format = 0;
    if !mesh.normals.is_empty() {
        format |= FORMAT_NORMAL;
    }
    if !mesh.uvs.is_empty() {
        format |= FORMAT_UV;
    }
    if mesh.has_colors() {
        format |= FORMAT_COLOR;
    }
    format
}
