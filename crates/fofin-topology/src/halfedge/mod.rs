mod iter;
pub mod mesh;
mod topology;
pub mod types;
mod validate;

pub use iter::{FaceHalfEdgeIter, FaceVertexIter, VertexOutgoingIter};
pub use mesh::Mesh;
pub use types::*;
