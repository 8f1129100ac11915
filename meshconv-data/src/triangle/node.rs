//! `.node` vertex file parsing

use std::io::BufRead;

use tracing::debug;

use crate::PREALLOCATE_LIMIT;
use crate::error::Result;
use crate::records::{Record, Records};
use crate::types::{IndexBase, Vertex};

/// Header line of a `.node` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeader {
    pub vertex_count: usize,
    pub dimension: u32,
    pub attribute_count: u32,
    pub boundary_marker_count: u32,
}

impl NodeHeader {
    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            vertex_count: record.parse(0)?,
            dimension: record.parse(1)?,
            attribute_count: record.parse(2)?,
            boundary_marker_count: record.parse(3)?,
        })
    }
}

/// Contents of a `.node` file.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFile {
    pub header: NodeHeader,
    /// Vertices in file order.
    pub vertices: Vec<Vertex>,
    /// Base detected from the declared vertex indices.
    pub index_base: IndexBase,
}

/// Read a `.node` file.
///
/// Each record is `<index> <x> <y> [attributes...] [boundary marker]`; only the
/// index and the first two coordinates are used.
pub fn read_node<R: BufRead>(reader: R) -> Result<NodeFile> {
    let mut records = Records::new(reader);
    let header = NodeHeader::from_record(&records.expect("node header")?)?;
    debug!(?header, "Read node header");

    // The declared count is untrusted; it only sizes the first allocation.
    let capacity = header.vertex_count.min(PREALLOCATE_LIMIT);
    let mut vertices = Vec::with_capacity(capacity);
    let mut indices = Vec::with_capacity(capacity);
    for record in records {
        let record = record?;
        indices.push(record.parse::<i64>(0)?);
        vertices.push(record.vertex(1)?);
    }

    Ok(NodeFile {
        header,
        vertices,
        index_base: IndexBase::detect(indices),
    })
}
