//! shapegen - procedural triangle meshes
//!
//! Parametric generators for a box, an inward-facing room, a cylinder, a UV
//! sphere and a tube swept along a Bezier curve. Every generator fills a flat
//! vertex/index record ([`procedural::MeshData`]) or, through the same builder
//! traits, an interleaved GPU buffer ([`graphics::PackedMesh`]).
//!
//! ```no_run
//! use shapegen::procedural::{generate_sphere, MeshData};
//!
//! let sphere: MeshData = generate_sphere(18, 8, 0.24)?;
//! assert_eq!(sphere.vertex_count(), 2 + 7 * 18);
//! # Ok::<(), shapegen::GeometryError>(())
//! ```

pub mod config;
pub mod error;
pub mod graphics;
pub mod procedural;
pub mod scene;

pub use error::GeometryError;
