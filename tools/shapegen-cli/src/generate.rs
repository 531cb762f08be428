//! Shape commands - run one generator and export or summarize the result

use anyhow::{Context, Result, bail};
use clap::Args;
use glam::Vec3;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use shapegen::GeometryError;
use shapegen::procedural::{
    MeshData, generate_box, generate_cylinder, generate_room, generate_sphere, generate_swept_tube,
    write_obj,
};

/// Output options shared by every shape command
#[derive(Args)]
pub struct OutputArgs {
    /// Output file (.obj or .json); prints a summary when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the box command
#[derive(Args)]
pub struct BoxArgs {
    #[arg(long, default_value_t = 1.0)]
    pub width: f32,
    #[arg(long, default_value_t = 1.0)]
    pub height: f32,
    #[arg(long, default_value_t = 1.0)]
    pub depth: f32,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the room command
#[derive(Args)]
pub struct RoomArgs {
    #[arg(long, default_value_t = 3.0)]
    pub width: f32,
    #[arg(long, default_value_t = 3.0)]
    pub height: f32,
    #[arg(long, default_value_t = 3.0)]
    pub depth: f32,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the cylinder command
#[derive(Args)]
pub struct CylinderArgs {
    /// Radial divisions (min 3)
    #[arg(long, default_value_t = 18)]
    pub segments: u32,
    #[arg(long, default_value_t = 1.5)]
    pub height: f32,
    #[arg(long, default_value_t = 0.2)]
    pub radius: f32,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the sphere command
#[derive(Args)]
pub struct SphereArgs {
    /// Divisions around the Y axis (min 3)
    #[arg(long, default_value_t = 18)]
    pub longitude: u32,
    /// Divisions from pole to pole (min 2)
    #[arg(long, default_value_t = 8)]
    pub latitude: u32,
    #[arg(long, default_value_t = 0.24)]
    pub radius: f32,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the tube command
#[derive(Args)]
pub struct TubeArgs {
    /// Vertices per ring (min 3)
    #[arg(long, default_value_t = 18)]
    pub segments: u32,
    /// Path subdivisions (min 1)
    #[arg(long, default_value_t = 42)]
    pub bezier_segments: u32,
    #[arg(long, default_value_t = 0.2)]
    pub radius: f32,
    /// Bezier control point as x,y,z (repeat, at least twice)
    #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true, required = true)]
    pub points: Vec<Vec3>,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// A shape command: which generator to run and where its output goes
pub trait ShapeCommand {
    /// Object name used in logs and OBJ output
    const NAME: &'static str;

    fn generate(&self) -> Result<MeshData, GeometryError>;

    fn output(&self) -> &OutputArgs;
}

impl ShapeCommand for BoxArgs {
    const NAME: &'static str = "box";

    fn generate(&self) -> Result<MeshData, GeometryError> {
        generate_box(self.width, self.height, self.depth)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

impl ShapeCommand for RoomArgs {
    const NAME: &'static str = "room";

    fn generate(&self) -> Result<MeshData, GeometryError> {
        generate_room(self.width, self.height, self.depth)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

impl ShapeCommand for CylinderArgs {
    const NAME: &'static str = "cylinder";

    fn generate(&self) -> Result<MeshData, GeometryError> {
        generate_cylinder(self.segments, self.height, self.radius)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

impl ShapeCommand for SphereArgs {
    const NAME: &'static str = "sphere";

    fn generate(&self) -> Result<MeshData, GeometryError> {
        generate_sphere(self.longitude, self.latitude, self.radius)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

impl ShapeCommand for TubeArgs {
    const NAME: &'static str = "tube";

    fn generate(&self) -> Result<MeshData, GeometryError> {
        generate_swept_tube(self.segments, &self.points, self.bezier_segments, self.radius)
    }

    fn output(&self) -> &OutputArgs {
        &self.output
    }
}

/// Execute a shape command
pub fn execute<C: ShapeCommand>(command: C) -> Result<()> {
    let mesh = command
        .generate()
        .with_context(|| format!("Failed to generate {}", C::NAME))?;

    match &command.output().output {
        Some(path) => {
            export(&mesh, path, C::NAME)?;
            info!(
                shape = C::NAME,
                vertices = mesh.vertex_count(),
                triangles = mesh.triangle_count(),
                path = %path.display(),
                "exported mesh"
            );
        }
        None => print_summary(C::NAME, &mesh),
    }
    Ok(())
}

/// Output format chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Obj,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("obj") => Ok(Self::Obj),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "Unsupported output file {} (expected .obj or .json)",
                path.display()
            ),
        }
    }
}

/// Write `mesh` to `path` in the format its extension names
pub fn export(mesh: &MeshData, path: &Path, name: &str) -> Result<()> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Obj => write_obj(mesh, path, name)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        ExportFormat::Json => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            serde_json::to_writer(BufWriter::new(file), mesh)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }
    Ok(())
}

fn print_summary(name: &str, mesh: &MeshData) {
    println!("{}", name);
    println!("  Vertices:  {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());
    if let Some((min, max)) = mesh.bounds() {
        println!("  Bounds:    {:?} .. {:?}", min.to_array(), max.to_array());
    }
    if mesh.has_colors() {
        println!("  Colors:    per vertex");
    }
}

/// Parse `x,y,z` into a point
fn parse_point(s: &str) -> Result<Vec3, String> {
    let components: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = components.as_slice() else {
        return Err(format!("expected x,y,z, got '{}'", s));
    };

    let parse = |c: &str| {
        c.parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{}': {}", c, e))
    };
    Ok(Vec3::new(parse(*x)?, parse(*y)?, parse(*z)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2,3").unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(parse_point("-0.3, 0.6, 0").unwrap(), Vec3::new(-0.3, 0.6, 0.0));
    }

    #[test]
    fn test_parse_point_rejects_malformed() {
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,3,4").is_err());
        assert!(parse_point("1,two,3").is_err());
        assert!(parse_point("").is_err());
    }

    #[test]
    fn test_export_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.obj")).unwrap(), ExportFormat::Obj);
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")).unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_path(Path::new("a.stl")).is_err());
        assert!(ExportFormat::from_path(Path::new("mesh")).is_err());
    }

    #[test]
    fn test_export_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cylinder.json");
        let args = CylinderArgs {
            segments: 6,
            height: 1.0,
            radius: 0.5,
            output: OutputArgs {
                output: Some(path.clone()),
            },
        };
        execute(args).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mesh: MeshData = serde_json::from_str(&content).unwrap();
        assert_eq!(mesh.vertex_count(), 2 + 4 * 6);
    }

    #[test]
    fn test_export_obj() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("room.obj");
        let args = RoomArgs {
            width: 3.0,
            height: 3.0,
            depth: 3.0,
            output: OutputArgs {
                output: Some(path.clone()),
            },
        };
        execute(args).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("o room"));
        assert_eq!(content.lines().filter(|l| l.starts_with("f ")).count(), 10);
    }

    #[test]
    fn test_invalid_parameters_fail_with_context() {
        let args = TubeArgs {
            segments: 8,
            bezier_segments: 4,
            radius: 0.1,
            points: vec![Vec3::ZERO],
            output: OutputArgs { output: None },
        };
        let err = execute(args).unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate tube");
        assert!(err.root_cause().to_string().contains("control points"));
    }
}
