//! Meshconv Data Crate
//!
//! Readers for plain-text triangulation files and a writer for OFF meshes.
//! Everything here is synchronous and works on whole files in memory.

pub mod error;
pub mod fesom;
pub mod off;
pub mod records;
pub mod triangle;
pub mod types;

/// Upper bound on how many records a declared header count may pre-allocate.
pub const PREALLOCATE_LIMIT: usize = 1 << 16;

pub use error::{MeshError, Result};
pub use fesom::load_fesom_mesh;
pub use off::{off_path_for, save_off, write_off};
pub use triangle::load_triangle_mesh;
pub use types::{IndexBase, Triangle, TriangleMesh, Vertex};
