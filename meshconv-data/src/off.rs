//! OFF (Object File Format) writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MeshError, Result};
use crate::types::TriangleMesh;

/// Extension of the files written by [`save_off`].
pub const OFF_EXTENSION: &str = "off";

/// Path of the OFF file that sits beside `input`.
pub fn off_path_for(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension(OFF_EXTENSION)
}

/// Write `mesh` as OFF text.
///
/// The count line carries the declared counts, the edge count is always `0`,
/// and every vertex gets a `0` z coordinate. Coordinates are written as the
/// text they were read from.
pub fn write_off<W: Write>(mut writer: W, mesh: &TriangleMesh) -> std::io::Result<()> {
    writeln!(writer, "OFF")?;
    writeln!(writer, "{} {} 0", mesh.vertex_count, mesh.triangle_count)?;
    for vertex in &mesh.vertices {
        let [x, y] = &vertex.text;
        writeln!(writer, "{x} {y} 0")?;
    }
    for triangle in &mesh.triangles {
        let [c0, c1, c2] = triangle.corners;
        writeln!(writer, "3 {c0} {c1} {c2}")?;
    }
    writer.flush()
}

/// Create or overwrite the OFF file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_off(path: impl AsRef<Path>, mesh: &TriangleMesh) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MeshError::io(path, e))?;
    write_off(BufWriter::new(file), mesh).map_err(|e| MeshError::io(path, e))?;
    info!(
        "Wrote {} vertices and {} faces",
        mesh.vertices.len(),
        mesh.triangles.len()
    );
    Ok(())
}
