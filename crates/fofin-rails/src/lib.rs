//! Rail traversal over quad-dominant polygon meshes.
//!
//! A rail is a maximal combinatorial line through a mesh: a chain of edges
//! running straight through 4-valent vertices ([`continuous_edge_line`]), the
//! family of opposite edges across a strip of quads ([`parallel_edges`]), or
//! the strip of quads itself, anchored at a boundary face ([`face_strip`]).
//!
//! Every walk reads adjacency through [`MeshTopology`] only and never mutates
//! the mesh, so the batch variants in [`batch`] can fan out over a shared
//! mesh with rayon.

pub mod batch;
pub mod rails;

#[cfg(test)]
pub(crate) mod mock;

pub use fofin_core::traits::MeshTopology;
pub use rails::{continuous_edge_line, face_strip, parallel_edges, EdgeRail, FaceRail};
