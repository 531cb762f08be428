//! Procedural mesh types
//!
//! The builder traits that generators write through, and [`MeshData`], the
//! flat full-precision record every generator can produce.

use bytemuck::cast_slice;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Trait for mesh construction - enables generic geometry generation
///
/// This trait allows procedural generation functions to work with both:
/// - `MeshData`: flat f32 attribute arrays for export and inspection
/// - `PackedMesh`: interleaved GPU vertex buffer
pub trait MeshBuilder: Default {
    /// Add a vertex with position, UV coordinates, and normal, returning its index
    fn add_vertex(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3) -> u32;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    /// Number of vertices added so far
    fn vertex_count(&self) -> usize;
}

/// Trait extension for meshes carrying a per-vertex RGB color
pub trait MeshBuilderColor: MeshBuilder {
    /// Add a colored vertex, returning its index
    fn add_vertex_color(
        &mut self,
        position: Vec3,
        uv: (f32, f32),
        normal: Vec3,
        color: Vec3,
    ) -> u32;
}

/// Generated mesh record (f32 format)
///
/// Attribute arrays are index-aligned: vertex `i` is
/// `(positions[i], normals[i], uvs[i])`, plus `colors[i]` when colors are
/// present. `indices` is a triangle list with counter-clockwise front faces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Unit vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates as [u, v]
    pub uvs: Vec<[f32; 2]>,
    /// Vertex colors as [r, g, b] (empty if the shape has no colors)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<[f32; 3]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when every vertex carries a color
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.iter().map(|&p| Vec3::from(p));
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Check the record invariants
    ///
    /// # Errors
    /// - [`GeometryError::AttributeMismatch`] if positions, normals and uvs differ in length
    /// - [`GeometryError::ColorMismatch`] if colors are present but not one per vertex
    /// - [`GeometryError::PartialTriangle`] if the index count is not a multiple of 3
    /// - [`GeometryError::IndexOutOfRange`] for the first index past the vertex count
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertices = self.positions.len();
        if self.normals.len() != vertices || self.uvs.len() != vertices {
            return Err(GeometryError::AttributeMismatch {
                positions: vertices,
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }
        if !self.colors.is_empty() && self.colors.len() != vertices {
            return Err(GeometryError::ColorMismatch {
                colors: self.colors.len(),
                vertices,
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::PartialTriangle(self.indices.len()));
        }
        if let Some((slot, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertices)
        {
            return Err(GeometryError::IndexOutOfRange {
                index,
                slot,
                vertices,
            });
        }
        Ok(())
    }

    /// Fraction of triangles whose winding agrees with their vertex normals
    ///
    /// A triangle agrees when its right-hand face normal points the same way
    /// as the sum of its three vertex normals. Zero-area triangles are not
    /// counted. Returns 1.0 for a mesh without countable triangles.
    pub fn winding_agreement(&self) -> f32 {
        let mut counted = 0usize;
        let mut agreed = 0usize;

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let pa = Vec3::from(self.positions[a]);
            let face = (Vec3::from(self.positions[b]) - pa)
                .cross(Vec3::from(self.positions[c]) - pa);
            if face.length_squared() <= f32::EPSILON * f32::EPSILON {
                continue;
            }

            let normal = Vec3::from(self.normals[a])
                + Vec3::from(self.normals[b])
                + Vec3::from(self.normals[c]);
            counted += 1;
            if face.dot(normal) > 0.0 {
                agreed += 1;
            }
        }

        if counted == 0 {
            1.0
        } else {
            agreed as f32 / counted as f32
        }
    }

    /// Positions as raw bytes (3 x f32 per vertex, shader location 0)
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Normals as raw bytes (3 x f32 per vertex, shader location 1)
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// UVs as raw bytes (2 x f32 per vertex, shader location 2)
    pub fn uv_bytes(&self) -> &[u8] {
        cast_slice(&self.uvs)
    }

    /// Colors as raw bytes (3 x f32 per vertex, shader location 3), empty if absent
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(&self.colors)
    }

    /// Indices as raw bytes (u32 each)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

impl MeshBuilder for MeshData {
    fn add_vertex(&mut self, position: Vec3, uv: (f32, f32), normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push([uv.0, uv.1]);
        if !self.colors.is_empty() {
            self.colors.push([1.0, 1.0, 1.0]);
        }
        index
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

impl MeshBuilderColor for MeshData {
    fn add_vertex_color(
        &mut self,
        position: Vec3,
        uv: (f32, f32),
        normal: Vec3,
        color: Vec3,
    ) -> u32 {
        // Backfill white so colors stay index-aligned with earlier vertices
        if self.colors.is_empty() {
            self.colors = vec![[1.0, 1.0, 1.0]; self.positions.len()];
        }
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push([uv.0, uv.1]);
        self.colors.push(color.to_array());
        index
    }
}
