//! Scene command - build a manifest and export every object
//!
//! Without `--manifest` the built-in demo scene is used.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use shapegen::scene::{Scene, SceneManifest};

use crate::generate::export;

/// Arguments for the scene command
#[derive(Args)]
pub struct SceneArgs {
    /// Scene manifest (TOML); defaults to the built-in demo scene
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Directory to write one OBJ per object into
    #[arg(long)]
    pub out_dir: PathBuf,

    /// Write meshes in object space instead of applying each object's transform
    #[arg(long)]
    pub local: bool,

    /// Also write the resolved manifest to <out-dir>/scene.toml
    #[arg(long)]
    pub write_manifest: bool,
}

/// Execute the scene command
pub fn execute(args: SceneArgs) -> Result<()> {
    let manifest = match &args.manifest {
        Some(path) => SceneManifest::load(path)
            .with_context(|| format!("Failed to load manifest {}", path.display()))?,
        None => SceneManifest::demo(),
    };

    let scene = Scene::build(&manifest).context("Failed to build scene")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    println!("Scene: {} objects", scene.objects.len());
    for object in &scene.objects {
        let path = args.out_dir.join(format!("{}.obj", object.name));
        if args.local {
            export(&object.mesh, &path, &object.name)?;
        } else {
            export(&object.world_mesh(), &path, &object.name)?;
        }
        println!(
            "  {:<12} {:>6} vertices {:>6} triangles  {}",
            object.name,
            object.mesh.vertex_count(),
            object.mesh.triangle_count(),
            object.material.shader
        );
    }

    if args.write_manifest {
        let path = args.out_dir.join("scene.toml");
        let content = manifest.to_toml_string()?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    println!();
    println!("Render configuration:");
    print!("{}", manifest.render.to_toml_string()?);

    info!(
        objects = scene.objects.len(),
        vertices = scene.vertex_count(),
        out_dir = %args.out_dir.display(),
        "exported scene"
    );
    Ok(())
}
