//! Interleaved GPU vertex buffers

use bytemuck::{Pod, Zeroable, bytes_of, cast_slice, pod_read_unaligned};
use glam::Vec3;
use tracing::warn;

use super::vertex::{FORMAT_COLOR, FORMAT_NORMAL, FORMAT_UV, vertex_stride};
use crate::error::GeometryError;
use crate::procedural::{MeshBuilder, MeshBuilderColor, MeshData};

/// Interleaved vertex without color (POS_UV_NORMAL, 32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Interleaved vertex with color (POS_UV_COLOR_NORMAL, 44 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

/// Format used by every generated vertex
const BASE_FORMAT: u8 = FORMAT_UV | FORMAT_NORMAL;

/// Generated mesh data (INTERLEAVED FORMAT)
///
/// Implements the builder traits, so generators can write straight into an
/// upload-ready buffer. The format is fixed by the first vertex: a colored
/// first vertex selects POS_UV_COLOR_NORMAL, anything else POS_UV_NORMAL.
#[derive(Debug, Clone, Default)]
pub struct PackedMesh {
    format: u8,
    vertex_count: usize,
    /// Interleaved vertex bytes: position, normal, uv, then color if present
    pub vertices: Vec<u8>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl PackedMesh {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Interleave a validated mesh record
    ///
    /// # Errors
    /// Propagates the first [`MeshData::validate`] failure.
    pub fn from_mesh(mesh: &MeshData) -> Result<Self, GeometryError> {
        mesh.validate()?;

        let mut packed = Self::default();
        for i in 0..mesh.vertex_count() {
            let position = Vec3::from(mesh.positions[i]);
            let normal = Vec3::from(mesh.normals[i]);
            let uv = (mesh.uvs[i][0], mesh.uvs[i][1]);
            match mesh.colors.get(i) {
                Some(&color) => packed.add_vertex_color(position, uv, normal, Vec3::from(color)),
                None => packed.add_vertex(position, uv, normal),
            };
        }
        packed.indices.extend_from_slice(&mesh.indices);
        Ok(packed)
    }

    /// Format flags (combination of FORMAT_* constants)
    pub fn format(&self) -> u8 {
        if self.vertex_count == 0 {
            BASE_FORMAT
        } else {
            self.format
        }
    }

    /// Bytes per vertex
    pub fn stride(&self) -> u32 {
        vertex_stride(self.format())
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Indices as raw bytes (u32 each)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Read back one vertex; colorless formats report white
    pub fn vertex(&self, index: usize) -> Option<ColorVertex> {
        if index >= self.vertex_count {
            return None;
        }
        let stride = self.stride() as usize;
        let bytes = &self.vertices[index * stride..(index + 1) * stride];

        if self.format() & FORMAT_COLOR != 0 {
            Some(pod_read_unaligned(bytes))
        } else {
            let vertex: Vertex = pod_read_unaligned(bytes);
            Some(ColorVertex {
                position: vertex.position,
                normal: vertex.normal,
                uv: vertex.uv,
                color: [1.0; 3],
            })
        }
    }

    fn push(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3, color: Option<Vec3>) -> u32 {
        if self.vertex_count == 0 {
            self.format = match color {
                Some(_) => BASE_FORMAT | FORMAT_COLOR,
                None => BASE_FORMAT,
            };
        }

        let index = self.vertex_count as u32;
        if self.format & FORMAT_COLOR != 0 {
            let vertex = ColorVertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: [uv.0, uv.1],
                color: color.unwrap_or(Vec3::ONE).to_array(),
            };
            self.vertices.extend_from_slice(bytes_of(&vertex));
        } else {
            if color.is_some() {
                warn!(index, "PackedMesh: dropping color on a colorless vertex format");
            }
            let vertex = Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: [uv.0, uv.1],
            };
            self.vertices.extend_from_slice(bytes_of(&vertex));
        }

        self.vertex_count += 1;
        index
    }
}

impl MeshBuilder for PackedMesh {
    fn add_vertex(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3) -> u32 {
        self.push(position, uv, normal, None)
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl MeshBuilderColor for PackedMesh {
    fn add_vertex_color(
        &mut self,
        position: Vec3,
        uv: (f32, f32),
        normal: Vec3,
        color: Vec3,
    ) -> u32 {
        self.push(position, uv, normal, Some(color))
    }
}
