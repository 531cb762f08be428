//! Integration tests for the manifest to mesh pipeline
//!
//! Tests the complete flow:
//! 1. Parse a scene manifest from TOML
//! 2. Build every object in parallel
//! 3. Export OBJ files and pack GPU buffers

use std::io::BufRead;

use tempfile::tempdir;

use shapegen::graphics::{FORMAT_ALL, FORMAT_NORMAL, FORMAT_UV, PackedMesh};
use shapegen::procedural::{MeshData, generate_sphere, write_obj};
use shapegen::scene::{Scene, SceneError, SceneManifest, ShapeSpec};

const MANIFEST: &str = r#"
[render]
wireframe = true

[materials.flat]
shader = "cornell_gouraud"
coefficients = [0.1, 0.9, 0.3]
specular_alpha = 10.0

[materials.tiles]
shader = "texture"
coefficients = [0.1, 0.7, 0.3]
texture = "assets/textures/tiles_diffuse.dds"

[[objects]]
name = "walls"
material = "flat"
shape = { kind = "room", width = 3.0, height = 3.0, depth = 3.0 }

[[objects]]
name = "pipe"
material = "tiles"
shape = { kind = "tube", segments = 8, control_points = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]], bezier_segments = 12, radius = 0.1 }
transform = { translate = [0.0, -1.0, 0.0], scale = [2.0, 2.0, 2.0] }
"#;

#[test]
fn test_manifest_parses() {
    let manifest = SceneManifest::parse(MANIFEST).expect("Failed to parse manifest");

    assert!(manifest.render.wireframe);
    assert!(manifest.render.depth_test, "depth_test should default to true");
    assert_eq!(manifest.materials.len(), 2);
    assert_eq!(manifest.materials["tiles"].specular_alpha, 1.0);
    assert_eq!(manifest.objects.len(), 2);
    assert_eq!(manifest.objects[0].shape.kind(), "room");
    assert_eq!(manifest.objects[0].transform.scale, [1.0; 3]);
    assert!(matches!(
        manifest.objects[1].shape,
        ShapeSpec::Tube { segments: 8, bezier_segments: 12, .. }
    ));
}

#[test]
fn test_manifest_builds_scene() {
    let manifest = SceneManifest::parse(MANIFEST).unwrap();
    let scene = Scene::build(&manifest).expect("Failed to build scene");

    let pipe = scene.object("pipe").unwrap();
    assert_eq!(pipe.mesh.vertex_count(), 13 * 8 + 2 * 10);
    assert_eq!(pipe.mesh.winding_agreement(), 1.0);

    // Scale then translate: the path start lands at (0, -1, 0)
    let start = pipe.model_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((start - glam::Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);

    assert_eq!(scene.vertex_count(), 20 + 13 * 8 + 2 * 10);
    assert_eq!(scene.triangle_count(), 10 + 2 * 8 * 13);
}

#[test]
fn test_manifest_file_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scene.toml");

    let demo = SceneManifest::demo();
    std::fs::write(&path, demo.to_toml_string().unwrap()).expect("Failed to write manifest");

    let loaded = SceneManifest::load(&path).expect("Failed to load manifest");
    assert_eq!(loaded, demo);
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = tempdir().unwrap();
    let err = SceneManifest::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, SceneError::Io(_)));
}

#[test]
fn test_unknown_shape_kind_is_parse_error() {
    let content = r#"
[materials.flat]
shader = "flat"
coefficients = [1.0, 1.0, 1.0]

[[objects]]
name = "cone"
material = "flat"
shape = { kind = "cone", radius = 1.0 }
"#;
    let err = SceneManifest::parse(content).unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
}

#[test]
fn test_demo_scene_exports_obj_files() {
    let scene = Scene::build(&SceneManifest::demo()).unwrap();
    let dir = tempdir().expect("Failed to create temp dir");

    for object in &scene.objects {
        let path = dir.path().join(format!("{}.obj", object.name));
        write_obj(&object.mesh, &path, &object.name).expect("Failed to write OBJ");

        let file = std::fs::File::open(&path).unwrap();
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .map(Result::unwrap)
            .collect();

        let count = |prefix: &str| lines.iter().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), object.mesh.vertex_count(), "{}", object.name);
        assert_eq!(count("vn "), object.mesh.vertex_count(), "{}", object.name);
        assert_eq!(count("f "), object.mesh.triangle_count(), "{}", object.name);
        assert!(lines.contains(&format!("o {}", object.name)));
    }
}

#[test]
fn test_scene_meshes_pack_for_upload() {
    let scene = Scene::build(&SceneManifest::demo()).unwrap();

    for object in &scene.objects {
        let packed = PackedMesh::from_mesh(&object.mesh).unwrap();
        let expected = if object.mesh.has_colors() {
            FORMAT_ALL
        } else {
            FORMAT_UV | FORMAT_NORMAL
        };
        assert_eq!(packed.format(), expected, "{}", object.name);
        assert_eq!(
            packed.vertices.len(),
            packed.vertex_count() * packed.stride() as usize
        );
        assert_eq!(packed.indices, object.mesh.indices);
    }
}

#[test]
fn test_mesh_json_round_trip() {
    let sphere: MeshData = generate_sphere(8, 4, 1.0).unwrap();
    let json = serde_json::to_string(&sphere).unwrap();

    // Colorless meshes omit the color array entirely
    assert!(!json.contains("colors"));

    let decoded: MeshData = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, sphere);
}
