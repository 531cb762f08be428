//! Procedural mesh primitives
//!
//! Every generator writes positions, normals and UVs through a
//! [`MeshBuilder`](super::MeshBuilder); the room also writes per-vertex colors.

mod box_room;
mod cylinder;
mod sphere;
mod swept_tube;

// Re-export all public functions
pub use box_room::{ROOM_PALETTE, generate_box, generate_room};
pub use cylinder::generate_cylinder;
pub use sphere::generate_sphere;
pub use swept_tube::generate_swept_tube;
