//! Scene manifest parsing (scene.toml)
//!
//! ```toml
//! [render]
//! backface_culling = true
//!
//! [materials.tiles]
//! shader = "texture"
//! coefficients = [0.1, 0.7, 0.3]
//! specular_alpha = 8.0
//! texture = "assets/textures/tiles_diffuse.dds"
//!
//! [[objects]]
//! name = "ball"
//! material = "tiles"
//! shape = { kind = "sphere", longitude_segments = 18, latitude_segments = 8, radius = 0.24 }
//! transform = { translate = [0.5, -0.8, 0.0] }
//! ```

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::SceneError;
use crate::config::RenderConfig;
use crate::error::GeometryError;
use crate::procedural::{
    MeshData, generate_box, generate_cylinder, generate_room, generate_sphere, generate_swept_tube,
};

/// Scene manifest structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialSpec>,
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

/// Material section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub shader: String,
    /// Ambient, diffuse and specular weights
    pub coefficients: [f32; 3],
    /// Specular exponent (default: 1.0)
    #[serde(default = "default_specular_alpha")]
    pub specular_alpha: f32,
    /// Diffuse texture path; absent for untextured materials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

fn default_specular_alpha() -> f32 {
    1.0
}

/// One `[[objects]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub name: String,
    /// Key into the `[materials]` table
    pub material: String,
    pub shape: ShapeSpec,
    #[serde(default)]
    pub transform: TransformSpec,
}

/// Generator call, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Room {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        segments: u32,
        height: f32,
        radius: f32,
    },
    Sphere {
        longitude_segments: u32,
        latitude_segments: u32,
        radius: f32,
    },
    Tube {
        segments: u32,
        control_points: Vec<[f32; 3]>,
        bezier_segments: u32,
        radius: f32,
    },
}

impl ShapeSpec {
    /// Short shape name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Room { .. } => "room",
            Self::Cylinder { .. } => "cylinder",
            Self::Sphere { .. } => "sphere",
            Self::Tube { .. } => "tube",
        }
    }

    /// Run the generator this entry describes
    pub fn generate(&self) -> Result<MeshData, GeometryError> {
        match self {
            Self::Box {
                width,
                height,
                depth,
            } => generate_box(*width, *height, *depth),
            Self::Room {
                width,
                height,
                depth,
            } => generate_room(*width, *height, *depth),
            Self::Cylinder {
                segments,
                height,
                radius,
            } => generate_cylinder(*segments, *height, *radius),
            Self::Sphere {
                longitude_segments,
                latitude_segments,
                radius,
            } => generate_sphere(*longitude_segments, *latitude_segments, *radius),
            Self::Tube {
                segments,
                control_points,
                bezier_segments,
                radius,
            } => {
                let points: Vec<Vec3> = control_points.iter().copied().map(Vec3::from).collect();
                generate_swept_tube(*segments, &points, *bezier_segments, *radius)
            }
        }
    }
}

/// Placement applied as translate · rotate_y · scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSpec {
    #[serde(default)]
    pub translate: [f32; 3],
    #[serde(default)]
    pub rotate_y_degrees: f32,
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

fn default_scale() -> [f32; 3] {
    [1.0; 3]
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self {
            translate: [0.0; 3],
            rotate_y_degrees: 0.0,
            scale: default_scale(),
        }
    }
}

impl TransformSpec {
    /// First field that would make the matrix non-invertible or non-finite
    ///
    /// Translation and rotation must be finite; every scale component must be
    /// finite and non-zero so the normal matrix exists.
    pub fn invalid_field(&self) -> Option<&'static str> {
        if !self.translate.iter().all(|c| c.is_finite()) {
            Some("translate")
        } else if !self.rotate_y_degrees.is_finite() {
            Some("rotate_y_degrees")
        } else if !self.scale.iter().all(|&c| c.is_finite() && c != 0.0) {
            Some("scale")
        } else {
            None
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::from(self.translate))
            * Mat4::from_rotation_y(self.rotate_y_degrees.to_radians())
            * Mat4::from_scale(Vec3::from(self.scale))
    }
}

impl SceneManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, SceneError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The classic five-object test scene
    ///
    /// A 3×3×3 room holding a rotated box, a sphere, a cylinder and a tube
    /// swept along a five-point curve.
    pub fn demo() -> Self {
        let mut materials = BTreeMap::new();
        materials.insert(
            "cornell".to_string(),
            MaterialSpec {
                shader: "cornell_gouraud".to_string(),
                coefficients: [0.1, 0.9, 0.3],
                specular_alpha: 10.0,
                texture: None,
            },
        );
        materials.insert(
            "wood".to_string(),
            MaterialSpec {
                shader: "texture".to_string(),
                coefficients: [0.1, 0.7, 0.1],
                specular_alpha: 2.0,
                texture: Some("assets/textures/wood_texture.dds".to_string()),
            },
        );
        materials.insert(
            "tiles".to_string(),
            MaterialSpec {
                shader: "texture".to_string(),
                coefficients: [0.1, 0.7, 0.3],
                specular_alpha: 8.0,
                texture: Some("assets/textures/tiles_diffuse.dds".to_string()),
            },
        );

        let translated = |translate: [f32; 3]| TransformSpec {
            translate,
            ..TransformSpec::default()
        };

        let objects = vec![
            ObjectSpec {
                name: "room".to_string(),
                material: "cornell".to_string(),
                shape: ShapeSpec::Room {
                    width: 3.0,
                    height: 3.0,
                    depth: 3.0,
                },
                transform: TransformSpec::default(),
            },
            ObjectSpec {
                name: "box".to_string(),
                material: "wood".to_string(),
                shape: ShapeSpec::Box {
                    width: 0.34,
                    height: 0.34,
                    depth: 0.34,
                },
                transform: TransformSpec {
                    rotate_y_degrees: 45.0,
                    ..translated([-0.5, -0.8, 0.0])
                },
            },
            ObjectSpec {
                name: "sphere".to_string(),
                material: "tiles".to_string(),
                shape: ShapeSpec::Sphere {
                    longitude_segments: 18,
                    latitude_segments: 8,
                    radius: 0.24,
                },
                transform: translated([0.5, -0.8, 0.0]),
            },
            ObjectSpec {
                name: "tube".to_string(),
                material: "tiles".to_string(),
                shape: ShapeSpec::Tube {
                    segments: 18,
                    control_points: vec![
                        [-0.3, 0.6, 0.0],
                        [0.0, 1.6, 0.0],
                        [1.4, 0.3, 0.0],
                        [0.0, 0.3, 0.0],
                        [0.0, -0.5, 0.0],
                    ],
                    bezier_segments: 42,
                    radius: 0.2,
                },
                transform: translated([0.5, 0.0, 0.0]),
            },
            ObjectSpec {
                name: "cylinder".to_string(),
                material: "wood".to_string(),
                shape: ShapeSpec::Cylinder {
                    segments: 18,
                    height: 1.5,
                    radius: 0.2,
                },
                transform: translated([-0.5, 0.3, 0.0]),
            },
        ];

        Self {
            render: RenderConfig::default(),
            materials,
            objects,
        }
    }
}
