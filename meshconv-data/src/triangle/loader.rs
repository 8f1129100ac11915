//! Loading a `.ele` / `.node` pair into a [`TriangleMesh`]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{MeshError, Result};
use crate::records::Records;
use crate::triangle::{read_ele_header, read_ele_triangles, read_node};
use crate::types::TriangleMesh;

/// Extension of the element file the loader accepts.
pub const ELE_EXTENSION: &str = "ele";
/// Extension of the companion vertex file.
pub const NODE_EXTENSION: &str = "node";

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| MeshError::io(path, e))
}

/// Load a triangle mesh from a `.ele` file and the `.node` file beside it.
///
/// Triangle corners are rebased to address the vertex list from zero. The
/// `.node` file is only opened once the element header has been checked, so
/// a rejected input never touches the companion file.
///
/// # Errors
///
/// - [`MeshError::UnsupportedFormat`] if `path` does not end in `.ele`
/// - [`MeshError::UnsupportedElement`] if elements are not 3-node triangles
/// - [`MeshError::Io`] if either file cannot be opened
/// - [`MeshError::InFile`] if either file holds malformed records
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_triangle_mesh(path: impl AsRef<Path>) -> Result<TriangleMesh> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ELE_EXTENSION) => {}
        other => {
            return Err(MeshError::UnsupportedFormat {
                extension: other.map(str::to_owned),
            });
        }
    }

    let mut elements = Records::new(open(path)?);
    let header = read_ele_header(&mut elements).map_err(|e| e.in_file(path))?;
    debug!(?header, "Read element header");
    if header.nodes_per_triangle != 3 {
        return Err(MeshError::UnsupportedElement {
            nodes_per_triangle: header.nodes_per_triangle,
        });
    }

    let node_path = path.with_extension(NODE_EXTENSION);
    let node = read_node(open(&node_path)?).map_err(|e| e.in_file(&node_path))?;
    debug!(base = ?node.index_base, "Detected vertex index base");

    let triangles = read_ele_triangles(elements)
        .map_err(|e| e.in_file(path))?
        .into_iter()
        .map(|t| t.rebased(node.index_base))
        .collect();

    let mesh = TriangleMesh {
        vertex_count: node.header.vertex_count,
        triangle_count: header.triangle_count,
        vertices: node.vertices,
        triangles,
    };

    if !mesh.counts_match() {
        warn!(
            "Declared {} vertices and {} triangles, read {} and {}",
            mesh.vertex_count,
            mesh.triangle_count,
            mesh.vertices.len(),
            mesh.triangles.len()
        );
    }
    let dangling = mesh.out_of_range_corners();
    if dangling > 0 {
        warn!("{} triangle corners do not address a vertex", dangling);
    }

    info!(
        "Loaded {} vertices and {} triangles",
        mesh.vertices.len(),
        mesh.triangles.len()
    );
    Ok(mesh)
}
