//! GPU-facing vertex layouts
//!
//! Format flags, strides and attribute locations for uploading generated
//! meshes, plus [`PackedMesh`], an interleaved buffer that generators can
//! fill directly.

mod packed;
mod vertex;

pub use packed::{ColorVertex, PackedMesh, Vertex};
pub use vertex::{
    FORMAT_ALL, FORMAT_COLOR, FORMAT_NORMAL, FORMAT_UV, LOCATION_COLOR, LOCATION_NORMAL,
    LOCATION_POSITION, LOCATION_UV, VertexAttribute, format_name, mesh_format, vertex_attributes,
    vertex_stride,
};
