//! FESOM `nod2d.out` / `elem2d.out` mesh files.
//!
//! Both files start with a record count followed by exactly that many
//! records. Element corners are always 1-based.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::PREALLOCATE_LIMIT;
use crate::error::{MeshError, Result};
use crate::records::{Record, Records};
use crate::types::{IndexBase, Triangle, TriangleMesh, Vertex};

/// Default name of the FESOM vertex file.
pub const NOD2D_FILE: &str = "nod2d.out";
/// Default name of the FESOM element file.
pub const ELEM2D_FILE: &str = "elem2d.out";

fn read_counted<R, T>(reader: R, what: &str, parse: impl Fn(&Record) -> Result<T>) -> Result<Vec<T>>
where
    R: BufRead,
{
    let mut records = Records::new(reader);
    let count: usize = records.expect(&format!("{what} count"))?.parse(0)?;
    debug!("Expecting {} {} records", count, what);

    let mut items = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
    for i in 0..count {
        let record = records.next().ok_or_else(|| {
            MeshError::parse(
                records.line(),
                format!("expected {count} {what} records, found {i}"),
            )
        })??;
        items.push(parse(&record)?);
    }
    Ok(items)
}

/// Read `nod2d.out` records `<index> <x> <y> <flag>`, keeping `x` and `y`.
pub fn read_nod2d<R: BufRead>(reader: R) -> Result<Vec<Vertex>> {
    read_counted(reader, "vertex", |record| record.vertex(1))
}

/// Read `elem2d.out` records `<c0> <c1> <c2>` and rebase them to zero.
pub fn read_elem2d<R: BufRead>(reader: R) -> Result<Vec<Triangle>> {
    read_counted(reader, "element", |record| {
        Ok(Triangle::new(record.parse(0)?, record.parse(1)?, record.parse(2)?).rebased(IndexBase::One))
    })
}

fn read_file<T>(path: &Path, read: impl FnOnce(BufReader<File>) -> Result<T>) -> Result<T> {
    let file = File::open(path).map_err(|e| MeshError::io(path, e))?;
    read(BufReader::new(file)).map_err(|e| e.in_file(path))
}

/// Load a FESOM mesh from its vertex and element files.
#[tracing::instrument(skip_all, fields(nodes = %nodes.as_ref().display(), elements = %elements.as_ref().display()))]
pub fn load_fesom_mesh(nodes: impl AsRef<Path>, elements: impl AsRef<Path>) -> Result<TriangleMesh> {
    let vertices = read_file(nodes.as_ref(), read_nod2d)?;
    let triangles = read_file(elements.as_ref(), read_elem2d)?;

    let mesh = TriangleMesh::new(vertices, triangles);
    info!(
        "Loaded {} vertices and {} triangles",
        mesh.vertex_count, mesh.triangle_count
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_nod2d_drops_third_coordinate() {
        let input = b"3\n1 0 0 0\n2 1 0 1\n\n3 0 1 0\n";
        let vertices = read_nod2d(&input[..]).unwrap();
        assert_eq!(
            vertices,
            [Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)]
        );
    }

    #[test]
    fn test_read_elem2d_rebases() {
        let input = b"2\n1 2 3\n2 3 4\n";
        let triangles = read_elem2d(&input[..]).unwrap();
        assert_eq!(triangles, [Triangle::new(0, 1, 2), Triangle::new(1, 2, 3)]);
    }

    #[test]
    fn test_reads_only_declared_records() {
        let input = b"1\n1 2 3\n4 5 6\n";
        assert_eq!(read_elem2d(&input[..]).unwrap().len(), 1);
    }

    #[test]
    fn test_huge_declared_count() {
        let err = read_elem2d(&b"18446744073709551615\n1 2 3\n"[..]).unwrap_err();
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_too_few_records() {
        let err = read_elem2d(&b"3\n1 2 3\n"[..]).unwrap_err();
        assert!(err.to_string().contains("expected 3 element records, found 1"));
    }

    #[test]
    fn test_load_fesom_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join(NOD2D_FILE);
        let elements = dir.path().join(ELEM2D_FILE);
        std::fs::write(&nodes, "3\n1 0 0 0\n2 2 0 0\n3 0 2 0\n").unwrap();
        std::fs::write(&elements, "1\n1 2 3\n").unwrap();

        let mesh = load_fesom_mesh(&nodes, &elements).unwrap();
        assert_eq!(mesh.vertex_count, 3);
        assert_eq!(mesh.triangles, [Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn test_missing_element_file() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join(NOD2D_FILE);
        std::fs::write(&nodes, "0\n").unwrap();

        let err = load_fesom_mesh(&nodes, dir.path().join(ELEM2D_FILE)).unwrap_err();
        assert!(matches!(err, MeshError::Io { .. }));
    }
}
