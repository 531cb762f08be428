//! Procedural mesh generation
//!
//! Functions for generating parametric shapes with normals and UV mapping.
//!
//! Generators are generic over the output:
//! - [`MeshData`]: flat f32 attribute arrays plus u32 indices
//! - [`PackedMesh`](crate::graphics::PackedMesh): interleaved GPU vertex buffer
//!
//! ```no_run
//! use shapegen::procedural::{generate_cylinder, MeshData};
//!
//! let cylinder: MeshData = generate_cylinder(18, 1.5, 0.2)?;
//! cylinder.validate()?;
//! # Ok::<(), shapegen::GeometryError>(())
//! ```

mod curve;
mod export;
mod frame;
mod primitives;
mod types;


pub use types::{MeshBuilder, MeshBuilderColor, MeshData};

// Curve and frame helpers used by the swept tube
pub use curve::{MAX_CURVE_DEGREE, bezier_point, binomial, sample_bezier};
pub use frame::{FALLBACK_AXIS, Frame, PARALLEL_EPSILON, REFERENCE_AXIS, build_frames};

// Re-export OBJ export
pub use export::{write_obj, write_obj_to};

pub use primitives::{
    ROOM_PALETTE, generate_box, generate_cylinder, generate_room, generate_sphere,
    generate_swept_tube,
};
