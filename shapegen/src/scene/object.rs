//! A generated mesh placed in the world with a material

use glam::{Mat3, Mat4, Vec3};
use std::sync::Arc;

use super::material::{Material, UNIFORM_MODEL_MATRIX, UNIFORM_NORMAL_MATRIX, UniformSink};
use crate::procedural::MeshData;

/// Mesh, material and model matrix for one drawable
///
/// Mesh and material are shared: cloning an object or building several
/// objects from one material never copies vertex data or material state.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Arc<MeshData>,
    pub material: Arc<Material>,
    model: Mat4,
}

impl SceneObject {
    /// Place `mesh` at the origin
    pub fn new(name: impl Into<String>, mesh: Arc<MeshData>, material: Arc<Material>) -> Self {
        Self {
            name: name.into(),
            mesh,
            material,
            model: Mat4::IDENTITY,
        }
    }

    /// Current model matrix
    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }

    /// Apply `transformation` after the current model matrix
    pub fn transform(&mut self, transformation: Mat4) {
        self.model = transformation * self.model;
    }

    /// Return to the identity transform
    pub fn reset_model_matrix(&mut self) {
        self.model = Mat4::IDENTITY;
    }

    /// Inverse-transpose of the model matrix's upper 3x3
    ///
    /// Keeps normals perpendicular to surfaces under non-uniform scale.
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.model).inverse().transpose()
    }

    /// Copy of the mesh with the model matrix baked in
    ///
    /// Positions go through the model matrix, normals through the normal
    /// matrix and are renormalized. UVs, colors and indices are unchanged.
    /// A singular model matrix (a zero scale) leaves zero normals; manifests
    /// with such transforms are rejected by [`Scene::build`](super::Scene::build).
    pub fn world_mesh(&self) -> MeshData {
        let normal_matrix = self.normal_matrix();
        let mut mesh = MeshData::clone(&self.mesh);
        for position in &mut mesh.positions {
            *position = self.model.transform_point3(Vec3::from(*position)).to_array();
        }
        for normal in &mut mesh.normals {
            *normal = (normal_matrix * Vec3::from(*normal))
                .normalize_or_zero()
                .to_array();
        }
        mesh
    }

    /// Write model, normal matrix and material uniforms for drawing this object
    pub fn apply_uniforms<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        sink.set_mat4(UNIFORM_MODEL_MATRIX, self.model);
        sink.set_mat3(UNIFORM_NORMAL_MATRIX, self.normal_matrix());
        self.material.apply_uniforms(sink);
    }
}
