//! Wavefront OBJ export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::MeshData;

/// Write a mesh to an OBJ file
///
/// See [`write_obj_to`] for the layout.
pub fn write_obj(mesh: &MeshData, path: &Path, name: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj_to(mesh, &mut writer, name)?;
    writer.flush()
}

/// Write a mesh as OBJ text
///
/// Emits one `o` line, then `v` (with `r g b` appended when the mesh has
/// colors), `vt` and `vn` lines in vertex order, then one `f` line per
/// triangle. Vertex, UV and normal share the same 1-based index, so faces
/// are written as `f a/a/a b/b/b c/c/c`.
pub fn write_obj_to<W: Write>(mesh: &MeshData, writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer, "# shapegen: {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count())?;
    writeln!(writer, "o {}", name)?;

    for (i, [x, y, z]) in mesh.positions.iter().enumerate() {
        match mesh.colors.get(i) {
            Some([r, g, b]) => writeln!(writer, "v {} {} {} {} {} {}", x, y, z, r, g, b)?,
            None => writeln!(writer, "v {} {} {}", x, y, z)?,
        }
    }
    for [u, v] in &mesh.uvs {
        writeln!(writer, "vt {} {}", u, v)?;
    }
    for [x, y, z] in &mesh.normals {
        writeln!(writer, "vn {} {} {}", x, y, z)?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}
