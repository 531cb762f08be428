//! shapegen - generate procedural meshes from the command line
//!
//! # Commands
//!
//! - `shapegen box` - Closed box with flat faces
//! - `shapegen room` - Open, inward-facing colored room
//! - `shapegen cylinder` - Capped cylinder
//! - `shapegen sphere` - UV sphere
//! - `shapegen tube` - Tube swept along a Bezier curve
//! - `shapegen scene` - Every object of a scene manifest
//!
//! # Usage
//!
//! ```bash
//! # Print a summary
//! shapegen sphere --longitude 18 --latitude 8 --radius 0.24
//!
//! # Export (format follows the extension)
//! shapegen cylinder --segments 18 --height 1.5 --radius 0.2 -o cylinder.obj
//! shapegen tube --segments 18 --bezier-segments 42 --radius 0.2 \
//!     --point=-0.3,0.6,0 --point 0,1.6,0 --point 1.4,0.3,0 -o tube.json
//!
//! # Export the built-in demo scene, one OBJ per object
//! shapegen scene --out-dir out/
//! ```
//!
//! Set `RUST_LOG=debug` to see per-mesh generation logs.

mod generate;
mod scene;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// shapegen - procedural triangle meshes
#[derive(Parser)]
#[command(name = "shapegen")]
#[command(about = "Generate procedural triangle meshes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed box centered at the origin
    Box(generate::BoxArgs),

    /// Open room seen from inside, with colored walls
    Room(generate::RoomArgs),

    /// Capped cylinder around the Y axis
    Cylinder(generate::CylinderArgs),

    /// UV sphere centered at the origin
    Sphere(generate::SphereArgs),

    /// Tube swept along a Bezier curve
    Tube(generate::TubeArgs),

    /// Build a scene manifest and export every object
    Scene(scene::SceneArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Box(args) => generate::execute(args),
        Commands::Room(args) => generate::execute(args),
        Commands::Cylinder(args) => generate::execute(args),
        Commands::Sphere(args) => generate::execute(args),
        Commands::Tube(args) => generate::execute(args),
        Commands::Scene(args) => scene::execute(args),
    }
}
