//! Scenes built from manifests
//!
//! A scene is a flat list of [`SceneObject`]s plus the [`RenderConfig`] to
//! draw them with. Objects naming the same material share one
//! `Arc<Material>`; meshes are generated in parallel.

mod manifest;
mod material;
mod object;

pub use manifest::{MaterialSpec, ObjectSpec, SceneManifest, ShapeSpec, TransformSpec};
pub use material::{
    DIFFUSE_TEXTURE_UNIT, Material, MaterialKind, ResourceName, UNIFORM_DIFFUSE_TEXTURE,
    UNIFORM_MATERIAL_COEFFICIENTS, UNIFORM_MODEL_MATRIX, UNIFORM_NORMAL_MATRIX,
    UNIFORM_SPECULAR_ALPHA, UniformSink,
};
pub use object::SceneObject;

use glam::Vec3;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::{RenderConfig, RenderToggle};
use crate::error::GeometryError;

/// Error loading or building a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scene TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize scene: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Object '{object}' uses unknown material '{material}'")]
    UnknownMaterial { object: String, material: String },
    #[error("Object '{object}' has an invalid transform {field}")]
    InvalidTransform { object: String, field: &'static str },
    #[error("Object '{object}': {source}")]
    Geometry {
        object: String,
        #[source]
        source: GeometryError,
    },
}

/// Render flags plus placed, shaded meshes
#[derive(Debug, Clone)]
pub struct Scene {
    pub render: RenderConfig,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Generate every object in `manifest`
    ///
    /// Material references and transforms are checked before any mesh is
    /// generated.
    ///
    /// # Errors
    /// - [`SceneError::UnknownMaterial`] for a dangling material name
    /// - [`SceneError::InvalidTransform`] for a non-finite transform or a zero scale
    /// - [`SceneError::Geometry`] for the first object whose generator rejects its parameters
    pub fn build(manifest: &SceneManifest) -> Result<Self, SceneError> {
        let materials: BTreeMap<&str, Arc<Material>> = manifest
            .materials
            .iter()
            .map(|(name, spec)| (name.as_str(), Arc::new(material_from_spec(spec))))
            .collect();

        let shared: Vec<Arc<Material>> = manifest
            .objects
            .iter()
            .map(|object| {
                materials
                    .get(object.material.as_str())
                    .cloned()
                    .ok_or_else(|| SceneError::UnknownMaterial {
                        object: object.name.clone(),
                        material: object.material.clone(),
                    })
            })
            .collect::<Result<_, _>>()?;

        if let Some((object, field)) = manifest
            .objects
            .iter()
            .find_map(|object| object.transform.invalid_field().map(|field| (object, field)))
        {
            return Err(SceneError::InvalidTransform {
                object: object.name.clone(),
                field,
            });
        }

        // Generate meshes in parallel
        let meshes: Vec<_> = manifest
            .objects
            .par_iter()
            .map(|object| {
                object
                    .shape
                    .generate()
                    .map_err(|source| SceneError::Geometry {
                        object: object.name.clone(),
                        source,
                    })
            })
            .collect::<Result<_, _>>()?;

        let objects: Vec<SceneObject> = manifest
            .objects
            .iter()
            .zip(meshes)
            .zip(shared)
            .map(|((spec, mesh), material)| {
                let mut object = SceneObject::new(spec.name.clone(), Arc::new(mesh), material);
                object.transform(spec.transform.matrix());
                object
            })
            .collect();

        let scene = Self {
            render: manifest.render.clone(),
            objects,
        };
        info!(
            objects = scene.objects.len(),
            materials = materials.len(),
            vertices = scene.vertex_count(),
            triangles = scene.triangle_count(),
            "built scene"
        );
        Ok(scene)
    }

    /// Flip one render flag
    pub fn toggle(&mut self, toggle: RenderToggle) -> bool {
        self.render.toggle(toggle)
    }

    /// Find an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Total vertices across all objects
    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.vertex_count()).sum()
    }

    /// Total triangles across all objects
    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.triangle_count()).sum()
    }
}

fn material_from_spec(spec: &MaterialSpec) -> Material {
    let shader = ResourceName::new(&spec.shader);
    let coefficients = Vec3::from(spec.coefficients);
    match &spec.texture {
        Some(texture) => Material::textured(
            shader,
            coefficients,
            spec.specular_alpha,
            ResourceName::new(texture),
        ),
        None => Material::untextured(shader, coefficients, spec.specular_alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_builds() {
        let scene = Scene::build(&SceneManifest::demo()).unwrap();

        assert_eq!(scene.objects.len(), 5);
        for object in &scene.objects {
            object.mesh.validate().unwrap();
        }

        let room = scene.object("room").unwrap();
        assert_eq!(room.mesh.vertex_count(), 20);
        assert!(room.mesh.has_colors());

        let sphere = scene.object("sphere").unwrap();
        assert_eq!(sphere.mesh.vertex_count(), 2 + 7 * 18);

        let tube = scene.object("tube").unwrap();
        assert_eq!(tube.mesh.vertex_count(), 43 * 18 + 2 * 20);
    }

    #[test]
    fn test_objects_share_materials() {
        let scene = Scene::build(&SceneManifest::demo()).unwrap();
        let sphere = scene.object("sphere").unwrap();
        let tube = scene.object("tube").unwrap();
        let box_object = scene.object("box").unwrap();

        assert!(Arc::ptr_eq(&sphere.material, &tube.material));
        assert!(!Arc::ptr_eq(&sphere.material, &box_object.material));
        assert_eq!(
            box_object.material.diffuse_texture().map(ResourceName::as_str),
            Some("assets/textures/wood_texture.dds")
        );
    }

    #[test]
    fn test_demo_transforms() {
        let scene = Scene::build(&SceneManifest::demo()).unwrap();

        let cylinder = scene.object("cylinder").unwrap();
        let center = cylinder.model_matrix().transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(-0.5, 0.3, 0.0)).length() < 1e-6);

        // Rotation happens about the box's own center
        let box_object = scene.object("box").unwrap();
        let corner = box_object.model_matrix().transform_point3(Vec3::new(0.17, 0.0, 0.0));
        let expected = Vec3::new(-0.5, -0.8, 0.0)
            + Vec3::new(0.17 * std::f32::consts::FRAC_1_SQRT_2, 0.0, -0.17 * std::f32::consts::FRAC_1_SQRT_2);
        assert!((corner - expected).length() < 1e-5);
    }

    #[test]
    fn test_unknown_material_is_rejected_before_generation() {
        let mut manifest = SceneManifest::demo();
        manifest.objects[2].material = "marble".to_string();
        // Also break the geometry; the material error must win
        manifest.objects[3].shape = ShapeSpec::Cylinder {
            segments: 2,
            height: 1.0,
            radius: 1.0,
        };

        match Scene::build(&manifest) {
            Err(SceneError::UnknownMaterial { object, material }) => {
                assert_eq!(object, "sphere");
                assert_eq!(material, "marble");
            }
            other => panic!("expected UnknownMaterial, got {other:?}"),
        }
    }

    #[test]
    fn test_generator_error_names_object() {
        let mut manifest = SceneManifest::demo();
        manifest.objects[4].shape = ShapeSpec::Cylinder {
            segments: 2,
            height: 1.5,
            radius: 0.2,
        };

        let err = Scene::build(&manifest).unwrap_err();
        assert!(matches!(err, SceneError::Geometry { ref object, .. } if object == "cylinder"));
        assert!(err.to_string().contains("segments must be at least 3"));
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let mut manifest = SceneManifest::demo();
        manifest.objects[1].transform.scale = [1.0, 0.0, 1.0];

        match Scene::build(&manifest) {
            Err(SceneError::InvalidTransform { object, field }) => {
                assert_eq!(object, "box");
                assert_eq!(field, "scale");
            }
            other => panic!("expected InvalidTransform, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_transform_is_rejected() {
        let mut manifest = SceneManifest::demo();
        manifest.objects[4].transform.translate[0] = f32::NAN;
        let err = Scene::build(&manifest).unwrap_err();
        assert!(matches!(err, SceneError::InvalidTransform { field: "translate", .. }));

        let mut manifest = SceneManifest::demo();
        manifest.objects[0].transform.rotate_y_degrees = f32::INFINITY;
        assert!(Scene::build(&manifest).is_err());
    }

    #[test]
    fn test_built_objects_keep_unit_world_normals() {
        let mut manifest = SceneManifest::demo();
        manifest.objects[2].transform.scale = [-2.0, 0.5, 3.0];
        let scene = Scene::build(&manifest).unwrap();

        let world = scene.object("sphere").unwrap().world_mesh();
        for normal in &world.normals {
            assert!((Vec3::from(*normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_toggle_updates_render_config() {
        let mut scene = Scene::build(&SceneManifest::default()).unwrap();
        assert!(scene.objects.is_empty());
        assert!(scene.toggle(RenderToggle::BackfaceCulling));
        assert!(scene.render.backface_culling);
    }
}
