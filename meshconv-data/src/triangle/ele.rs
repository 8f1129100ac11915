//! `.ele` triangle file parsing

use std::io::BufRead;

use crate::error::Result;
use crate::records::{Record, Records};
use crate::types::Triangle;

/// Header line of a `.ele` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EleHeader {
    pub triangle_count: usize,
    pub nodes_per_triangle: u32,
    pub attribute_count: u32,
}

impl EleHeader {
    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            triangle_count: record.parse(0)?,
            nodes_per_triangle: record.parse(1)?,
            attribute_count: record.parse(2)?,
        })
    }
}

/// Contents of a `.ele` file.
#[derive(Debug, Clone, PartialEq)]
pub struct EleFile {
    pub header: EleHeader,
    /// Triangles with corners exactly as written in the file.
    pub triangles: Vec<Triangle>,
}

/// Read only the header, leaving `records` positioned at the first triangle.
pub fn read_ele_header<R: BufRead>(records: &mut Records<R>) -> Result<EleHeader> {
    EleHeader::from_record(&records.expect("element header")?)
}

/// Read the remaining `<index> <c0> <c1> <c2> [attributes...]` records.
pub fn read_ele_triangles<R: BufRead>(records: Records<R>) -> Result<Vec<Triangle>> {
    records
        .map(|record| {
            let record = record?;
            Ok(Triangle::new(
                record.parse(1)?,
                record.parse(2)?,
                record.parse(3)?,
            ))
        })
        .collect()
}

/// Read a whole `.ele` file without rebasing corners.
pub fn read_ele<R: BufRead>(reader: R) -> Result<EleFile> {
    let mut records = Records::new(reader);
    let header = read_ele_header(&mut records)?;
    let triangles = read_ele_triangles(records)?;
    Ok(EleFile { header, triangles })
}
