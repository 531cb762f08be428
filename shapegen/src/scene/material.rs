//! Materials and the uniform interface they write to

use glam::{Mat3, Mat4, Vec3};
use std::fmt;
use std::sync::Arc;

pub const UNIFORM_MODEL_MATRIX: &str = "model_matrix";
pub const UNIFORM_NORMAL_MATRIX: &str = "normal_matrix";
pub const UNIFORM_MATERIAL_COEFFICIENTS: &str = "material_coefficients";
pub const UNIFORM_SPECULAR_ALPHA: &str = "specular_alpha";
pub const UNIFORM_DIFFUSE_TEXTURE: &str = "diffuse_texture";

/// Texture unit the diffuse texture is bound to
pub const DIFFUSE_TEXTURE_UNIT: u32 = 0;

/// Destination for per-draw shader state
///
/// Implemented by the rendering backend. Shapegen only decides *what* is set.
pub trait UniformSink {
    fn set_mat4(&mut self, name: &str, value: Mat4);
    fn set_mat3(&mut self, name: &str, value: Mat3);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_f32(&mut self, name: &str, value: f32);
    /// Bind `texture` to `unit` and point the sampler uniform `name` at it
    fn bind_texture(&mut self, name: &str, unit: u32, texture: &ResourceName);
}

/// Name of an externally managed resource (shader program or texture file)
///
/// Cheap to clone; every material naming the same resource shares one string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName(Arc<str>);

impl ResourceName {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a material binds beyond its lighting coefficients
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialKind {
    /// Lighting coefficients only; color comes from the mesh
    Untextured,
    /// Adds a diffuse texture on [`DIFFUSE_TEXTURE_UNIT`]
    Textured { diffuse: ResourceName },
}

/// Phong-style surface description
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Shader program used to draw with this material
    pub shader: ResourceName,
    /// Ambient, diffuse and specular weights
    pub coefficients: Vec3,
    /// Specular exponent
    pub specular_alpha: f32,
    pub kind: MaterialKind,
}

impl Material {
    /// Material without a texture
    pub fn untextured(shader: ResourceName, coefficients: Vec3, specular_alpha: f32) -> Self {
        Self {
            shader,
            coefficients,
            specular_alpha,
            kind: MaterialKind::Untextured,
        }
    }

    /// Material sampling `diffuse` as its base color
    pub fn textured(
        shader: ResourceName,
        coefficients: Vec3,
        specular_alpha: f32,
        diffuse: ResourceName,
    ) -> Self {
        Self {
            shader,
            coefficients,
            specular_alpha,
            kind: MaterialKind::Textured { diffuse },
        }
    }

    /// The diffuse texture, if this material has one
    pub fn diffuse_texture(&self) -> Option<&ResourceName> {
        match &self.kind {
            MaterialKind::Textured { diffuse } => Some(diffuse),
            MaterialKind::Untextured => None,
        }
    }

    /// Write this material's uniforms
    pub fn apply_uniforms<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        sink.set_vec3(UNIFORM_MATERIAL_COEFFICIENTS, self.coefficients);
        sink.set_f32(UNIFORM_SPECULAR_ALPHA, self.specular_alpha);

        if let MaterialKind::Textured { diffuse } = &self.kind {
            sink.bind_texture(UNIFORM_DIFFUSE_TEXTURE, DIFFUSE_TEXTURE_UNIT, diffuse);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every uniform call for inspection
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub calls: Vec<String>,
    }

    impl UniformSink for RecordingSink {
        fn set_mat4(&mut self, name: &str, _value: Mat4) {
            self.calls.push(format!("mat4 {name}"));
        }

        fn set_mat3(&mut self, name: &str, _value: Mat3) {
            self.calls.push(format!("mat3 {name}"));
        }

        fn set_vec3(&mut self, name: &str, value: Vec3) {
            self.calls.push(format!("vec3 {name} {} {} {}", value.x, value.y, value.z));
        }

        fn set_f32(&mut self, name: &str, value: f32) {
            self.calls.push(format!("f32 {name} {value}"));
        }

        fn bind_texture(&mut self, name: &str, unit: u32, texture: &ResourceName) {
            self.calls.push(format!("texture {name} {unit} {texture}"));
        }
    }

    #[test]
    fn test_untextured_uniforms() {
        let material = Material::untextured(
            ResourceName::new("cornell_gouraud"),
            Vec3::new(0.1, 0.9, 0.3),
            10.0,
        );
        let mut sink = RecordingSink::default();
        material.apply_uniforms(&mut sink);

        assert_eq!(
            sink.calls,
            vec![
                "vec3 material_coefficients 0.1 0.9 0.3".to_string(),
                "f32 specular_alpha 10".to_string(),
            ]
        );
        assert!(material.diffuse_texture().is_none());
    }

    #[test]
    fn test_textured_binds_diffuse_on_unit_zero() {
        let material = Material::textured(
            ResourceName::new("texture"),
            Vec3::new(0.1, 0.7, 0.1),
            2.0,
            ResourceName::new("wood_texture.dds"),
        );
        let mut sink = RecordingSink::default();
        material.apply_uniforms(&mut sink);

        assert_eq!(sink.calls.len(), 3);
        assert_eq!(sink.calls[2], "texture diffuse_texture 0 wood_texture.dds");
        assert_eq!(
            material.diffuse_texture().map(ResourceName::as_str),
            Some("wood_texture.dds")
        );
    }

    #[test]
    fn test_resource_names_share_storage() {
        let name = ResourceName::new("phong");
        let copy = name.clone();
        assert!(Arc::ptr_eq(&name.0, &copy.0));
        assert_eq!(copy.to_string(), "phong");
    }
}
