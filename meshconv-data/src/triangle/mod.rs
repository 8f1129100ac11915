//! Triangle `.node` / `.ele` file pairs

mod ele;
mod loader;
mod node;

pub use ele::{EleFile, EleHeader, read_ele, read_ele_header, read_ele_triangles};
pub use loader::{ELE_EXTENSION, NODE_EXTENSION, load_triangle_mesh};
pub use node::{NodeFile, NodeHeader, read_node};
