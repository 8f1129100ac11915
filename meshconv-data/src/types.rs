//! Core data types for planar triangle meshes.
//!
//! These hold exactly what the converters read: 2D vertex positions in file
//! order and triangles as corner indices into that vertex list.

use glam::DVec2;

/// A planar mesh vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in the mesh plane. Any third coordinate in the input is dropped.
    pub position: DVec2,
    /// The x and y fields as written in the source file.
    pub text: [String; 2],
}

impl Vertex {
    /// Create a vertex at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            text: [x.to_string(), y.to_string()],
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Whether record indices in a file start counting at 0 or at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    Zero,
    #[default]
    One,
}

impl IndexBase {
    /// Amount to subtract from a file index to get a position in the vertex list.
    pub fn offset(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Detect the base from the declared indices of a vertex file.
    ///
    /// A file is zero-based only if some record declares index `0`. Anything
    /// else, including an empty file, falls back to one-based. A file whose
    /// only `0` index sits somewhere other than the first record is still
    /// treated as zero-based.
    pub fn detect(indices: impl IntoIterator<Item = i64>) -> Self {
        if indices.into_iter().any(|index| index == 0) {
            Self::Zero
        } else {
            Self::One
        }
    }
}

/// A triangle as three corner indices.
///
/// Corners are signed so that malformed input that rebases below zero is
/// carried through to the output instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub corners: [i64; 3],
}

impl Triangle {
    /// Create a triangle from three corner indices.
    pub fn new(c0: i64, c1: i64, c2: i64) -> Self {
        Self {
            corners: [c0, c1, c2],
        }
    }

    /// Shift every corner so that it addresses a zero-based vertex list.
    pub fn rebased(self, base: IndexBase) -> Self {
        Self {
            corners: self.corners.map(|c| c - base.offset()),
        }
    }
}

/// A vertex list and a triangle list, both in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    /// Vertex count as declared by the input header.
    pub vertex_count: usize,
    /// Triangle count as declared by the input header.
    pub triangle_count: usize,
    pub vertices: Vec<Vertex>,
    /// Triangles with zero-based corners.
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Build a mesh whose declared counts match the lists it holds.
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertex_count: vertices.len(),
            triangle_count: triangles.len(),
            vertices,
            triangles,
        }
    }

    /// Whether the declared counts agree with the records actually read.
    pub fn counts_match(&self) -> bool {
        self.vertex_count == self.vertices.len() && self.triangle_count == self.triangles.len()
    }

    /// Number of triangle corners that do not address a vertex in the list.
    pub fn out_of_range_corners(&self) -> usize {
        let len = self.vertices.len() as i64;
        self.triangles
            .iter()
            .flat_map(|t| t.corners)
            .filter(|&c| c < 0 || c >= len)
            .count()
    }
}
